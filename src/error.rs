use thiserror::Error;

/// Result type alias using MonitorError
pub type Result<T> = std::result::Result<T, MonitorError>;

#[derive(Error, Debug)]
pub enum MonitorError {
    /// The process/resource backend has no implementation for this platform
    #[error("system metrics are not supported on this platform")]
    Unsupported,

    /// The OS query ran but returned nothing usable
    #[error("failed to query system information: {message}")]
    SystemQuery { message: String },

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MonitorError {
    pub fn system_query(message: impl Into<String>) -> Self {
        Self::SystemQuery {
            message: message.into(),
        }
    }
}
