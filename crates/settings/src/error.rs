use std::path::PathBuf;

/// Errors produced while resolving or loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The resolved settings directory does not exist or is not a directory.
    #[error("Settings directory not found: {}", .path.display())]
    MissingDirectory { path: PathBuf },

    /// The required base settings file is absent from the settings directory.
    #[error("Base settings file not found: {}", .path.display())]
    MissingBase { path: PathBuf },

    /// The configuration library failed to read or merge the layered sources.
    #[error("Failed to assemble settings: {source}")]
    Build {
        #[from]
        source: config::ConfigError,
    },

    /// The merged settings did not match the requested shape.
    #[error("Failed to deserialize settings: {source}")]
    Deserialize {
        #[source]
        source: config::ConfigError,
    },
}
