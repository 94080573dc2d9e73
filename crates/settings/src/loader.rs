use crate::conventions::{self, BASE_FILE, ENV_PREFIX, ENV_SEPARATOR};
use crate::environment::RuntimeEnv;
use crate::error::SettingsError;
use crate::source::{EnvSource, ProcessEnv};
use config::{Config, Environment, File, FileFormat};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tracing::{debug, info};

/// Entry point for resolving layered settings.
#[derive(Debug)]
pub struct Settings;

impl Settings {
    /// Returns a new [`SettingsBuilder`] reading from the process environment.
    ///
    /// This is the recommended way to resolve settings.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Resolves settings with all defaults and deserializes them into `T`.
    ///
    /// # Errors
    /// See [`SettingsBuilder::load`].
    pub fn resolve<T>() -> Result<T, SettingsError>
    where
        T: DeserializeOwned,
    {
        Self::builder().load()
    }
}

/// A fluent builder for resolving the layered settings of an application.
///
/// Every knob has a convention-driven default: the environment comes from
/// `ROOST_ENVIRONMENT`, the directory from `ROOST_SETTINGS_PATH` (falling
/// back to the current directory), and overrides from `ROOST__…` variables.
/// Explicit builder values win over the environment lookups.
#[must_use = "builders do nothing unless you call .load()"]
#[derive(Debug)]
pub struct SettingsBuilder<E: EnvSource = ProcessEnv> {
    environment: Option<RuntimeEnv>,
    directory: Option<PathBuf>,
    prefix: String,
    env: E,
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self { environment: None, directory: None, prefix: ENV_PREFIX.to_owned(), env: ProcessEnv }
    }
}

impl<E: EnvSource> SettingsBuilder<E> {
    /// Pins the deployment environment instead of reading [`conventions::ENVIRONMENT_VAR`].
    pub fn environment(mut self, environment: impl Into<RuntimeEnv>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Pins the settings directory instead of reading [`conventions::SETTINGS_PATH_VAR`].
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Overrides the prefix of the override variables (default `ROOST`).
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replaces the environment source.
    ///
    /// All lookups — the two control variables and the override layer — go
    /// through the given source, so substituting it isolates the loader from
    /// process-global state.
    pub fn env_source<S: EnvSource>(self, env: S) -> SettingsBuilder<S> {
        SettingsBuilder {
            environment: self.environment,
            directory: self.directory,
            prefix: self.prefix,
            env,
        }
    }

    /// Resolves the layered settings and deserializes them into `T`.
    ///
    /// # Process
    /// 1. Resolves the environment name and the settings directory.
    /// 2. Layers the base file, the optional per-environment overlay, and
    ///    the override variables, later sources winning.
    /// 3. Deserializes the merged tree into `T`.
    ///
    /// # Errors
    /// Returns an error if:
    /// * The settings directory or the base file does not exist.
    /// * A file cannot be parsed or an override variable is malformed.
    /// * The merged tree does not match the structure of type `T`.
    pub fn load<T>(self) -> Result<T, SettingsError>
    where
        T: DeserializeOwned,
    {
        self.merge()?.try_deserialize::<T>().map_err(|source| SettingsError::Deserialize { source })
    }

    /// Resolves the layered settings into an untyped JSON tree.
    ///
    /// Useful for inspection tooling that has no target structure.
    ///
    /// # Errors
    /// See [`SettingsBuilder::load`].
    pub fn load_value(self) -> Result<serde_json::Value, SettingsError> {
        self.load()
    }

    fn merge(self) -> Result<Config, SettingsError> {
        let environment = self.environment.unwrap_or_else(|| RuntimeEnv::detect(&self.env));
        let directory = self
            .directory
            .or_else(|| conventions::settings_dir(&self.env))
            .unwrap_or_else(|| PathBuf::from("."));

        if !directory.is_dir() {
            return Err(SettingsError::MissingDirectory { path: directory });
        }

        let base = directory.join(BASE_FILE);
        if !base.is_file() {
            return Err(SettingsError::MissingBase { path: base });
        }
        let overlay = directory.join(conventions::overlay_file(&environment));

        info!(environment = %environment, directory = %directory.display(), "Loading settings");
        debug!(overlay = %overlay.display(), present = overlay.is_file(), "Environment overlay");

        let mut overrides = Environment::with_prefix(&self.prefix)
            .separator(ENV_SEPARATOR)
            .convert_case(config::Case::Snake); // e.g. ROOST__SERVER__PORT maps to server.port
        if let Some(vars) = self.env.snapshot() {
            overrides = overrides.source(Some(vars));
        }

        let config = Config::builder()
            .add_source(File::from(base).format(FileFormat::Json).required(true)) // required since existence was checked
            .add_source(File::from(overlay).format(FileFormat::Json).required(false))
            .add_source(overrides)
            .build()?;

        Ok(config)
    }
}
