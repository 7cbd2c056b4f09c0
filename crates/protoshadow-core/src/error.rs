//! Error types for protoshadow

use thiserror::Error;

/// Result type alias for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Error type for generator operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Generation of a root was cancelled before it completed
    #[error("generation cancelled")]
    Cancelled,

    /// A property descriptor reached the emitter in a shape it cannot render
    #[error("unsupported shape {shape} for property '{property}'")]
    UnsupportedShape { property: String, shape: String },

    /// The declaration graph is structurally unusable
    #[error("invalid declaration graph: {0}")]
    InvalidGraph(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl GeneratorError {
    /// Whether this error is a cooperative cancellation rather than a failure
    pub fn is_cancellation(&self) -> bool {
        matches!(self, GeneratorError::Cancelled)
    }
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        GeneratorError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for GeneratorError {
    fn from(err: toml::de::Error) -> Self {
        GeneratorError::ConfigError(err.to_string())
    }
}
