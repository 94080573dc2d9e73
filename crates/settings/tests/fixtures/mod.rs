use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Writes a settings file into `dir`.
///
/// # Panics
/// * If the file cannot be written.
pub fn write_settings(dir: &Path, name: &str, contents: &Value) {
    fs::write(dir.join(name), contents.to_string()).expect("settings file should be written");
}

/// Builds an in-memory environment from literal pairs.
#[must_use]
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(key, value)| ((*key).to_owned(), (*value).to_owned())).collect()
}

/// A typical service shape used across the loader tests.
#[derive(Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub server: ServerSection,
}

#[derive(Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}
