//! Substitutable environment access.
//!
//! The loader takes every environment lookup through [`EnvSource`] so tests
//! can pass an in-memory map to the builder instead of mutating the process
//! environment.

use std::collections::HashMap;
use std::env;

/// Read access to environment variables.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` when unset.
    ///
    /// Values that are empty after trimming count as unset.
    fn var(&self, key: &str) -> Option<String>;

    /// A snapshot of every variable, fed to the override layer.
    ///
    /// `None` means the override layer reads the process environment
    /// directly, which is what [`ProcessEnv`] does.
    fn snapshot(&self) -> Option<HashMap<String, String>> {
        None
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.trim().is_empty())
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.trim().is_empty()).cloned()
    }

    fn snapshot(&self) -> Option<HashMap<String, String>> {
        Some(self.clone())
    }
}
