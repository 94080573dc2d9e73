//! # Roost Settings
//!
//! Environment-driven application settings with a fixed on-disk convention.
//!
//! An application points `ROOST_SETTINGS_PATH` at a directory of settings
//! files and names its deployment environment in `ROOST_ENVIRONMENT`. The
//! loader then layers three sources, later sources overriding earlier ones:
//!
//! 1. `settings.json` — the required base file.
//! 2. `settings.{environment}.json` — an optional per-environment overlay
//!    (e.g. `settings.Development.json`).
//! 3. `ROOST__…` environment variables, nested keys separated by `__`
//!    (e.g. `ROOST__SERVER__PORT` maps to `server.port`).
//!
//! Resolution happens once, synchronously, at startup. There is no caching,
//! watching, or reload.
//!
//! ## Example
//!
//! ```rust,no_run
//! use roost_settings::Settings;
//!
//! #[derive(Default, serde::Deserialize)]
//! #[serde(default)]
//! struct AppConfig {
//!     port: u16,
//! }
//!
//! # fn main() -> Result<(), roost_settings::SettingsError> {
//! let cfg: AppConfig = Settings::builder().load()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! All environment access flows through the [`EnvSource`] seam supplied to
//! the builder, so tests can substitute an in-memory map instead of mutating
//! process-global state:
//!
//! ```rust,no_run
//! use roost_settings::Settings;
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), roost_settings::SettingsError> {
//! let vars: HashMap<String, String> =
//!     [("ROOST_ENVIRONMENT".to_owned(), "Staging".to_owned())].into();
//!
//! let settings = Settings::builder().env_source(vars).load_value()?;
//! # Ok(())
//! # }
//! ```

pub mod conventions;
mod environment;
mod error;
mod loader;
pub mod source;

pub use environment::RuntimeEnv;
pub use error::SettingsError;
pub use loader::{Settings, SettingsBuilder};
pub use source::{EnvSource, ProcessEnv};

pub mod prelude {
    pub use crate::environment::RuntimeEnv;
    pub use crate::error::SettingsError;
    pub use crate::loader::{Settings, SettingsBuilder};
    pub use crate::source::{EnvSource, ProcessEnv};
}
