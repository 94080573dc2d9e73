use std::path::PathBuf;

/// Errors that can occur during logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Failure when configuring the rolling file appender (e.g., invalid path).
    #[error("Rolling file appender error: {source}")]
    Appender {
        #[from]
        source: tracing_appender::rolling::InitError,
    },

    /// Occurs if a global tracing subscriber has already been initialized in the current process.
    #[error("Tracing subscriber error: {source}")]
    Subscriber {
        #[from]
        source: tracing_subscriber::util::TryInitError,
    },

    /// Failure preparing the log directory.
    #[error("Failed to create log directory {}: {source}", .path.display())]
    CreateDir {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Invalid configuration supplied to the logger builder.
    #[error("Invalid logger configuration: {message}")]
    InvalidConfiguration { message: String },
}
