use thiserror::Error;

/// Top-level error type for the Zonewise system.
///
/// Each variant wraps a subsystem-specific failure. Subsystem crates define
/// their own error types where they need finer variants and convert into
/// `ZonewiseError` so that the `?` operator works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ZonewiseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for ZonewiseError {
    fn from(err: toml::de::Error) -> Self {
        ZonewiseError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ZonewiseError {
    fn from(err: toml::ser::Error) -> Self {
        ZonewiseError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ZonewiseError {
    fn from(err: serde_json::Error) -> Self {
        ZonewiseError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Zonewise operations.
pub type Result<T> = std::result::Result<T, ZonewiseError>;
