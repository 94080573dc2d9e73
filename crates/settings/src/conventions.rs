//! Naming conventions of the settings contract.
//!
//! These constants are the externally observable surface: the two control
//! variables, the file names, and the override prefix. Everything else in
//! the crate derives from them.

use crate::environment::RuntimeEnv;
use crate::source::EnvSource;
use std::path::PathBuf;

/// Variable naming the deployment environment (e.g. `Development`).
pub const ENVIRONMENT_VAR: &str = "ROOST_ENVIRONMENT";

/// Variable naming the directory that holds the settings files.
pub const SETTINGS_PATH_VAR: &str = "ROOST_SETTINGS_PATH";

/// Fixed name of the required base settings file.
pub const BASE_FILE: &str = "settings.json";

/// Prefix of override variables (`ROOST__SECTION__KEY`).
pub const ENV_PREFIX: &str = "ROOST";

/// Separator between nested keys in override variables.
pub const ENV_SEPARATOR: &str = "__";

/// File name of the per-environment overlay, derived from the environment name.
///
/// The environment name is inserted verbatim, so `Development` selects
/// `settings.Development.json` and a custom `Qa` selects `settings.Qa.json`.
#[must_use]
pub fn overlay_file(environment: &RuntimeEnv) -> String {
    format!("settings.{environment}.json")
}

/// Resolves the settings directory named by [`SETTINGS_PATH_VAR`].
///
/// Returns `None` when the variable is unset or empty; callers fall back to
/// the process current directory.
#[must_use]
pub fn settings_dir(source: &impl EnvSource) -> Option<PathBuf> {
    source.var(SETTINGS_PATH_VAR).map(PathBuf::from)
}
