use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetingError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Event is not a key-value mapping (found {found})")]
    InvalidEvent { found: &'static str },

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Failed to load configuration from {location}: {error}")]
    LoadFailed {
        location: String,
        #[source]
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("YAML serialization failed: {reason}")]
    Yaml { reason: String },
}

pub type Result<T> = std::result::Result<T, GreetingError>;

impl From<serde_yaml::Error> for GreetingError {
    fn from(err: serde_yaml::Error) -> Self {
        GreetingError::Serialization(SerializationError::Yaml {
            reason: err.to_string(),
        })
    }
}

impl GreetingError {
    /// True when the failure was caused by what the caller sent rather than
    /// by how the function was deployed.
    pub fn is_client_error(&self) -> bool {
        match self {
            GreetingError::InvalidEvent { .. } => true,
            GreetingError::Serialization(_) => false,
            GreetingError::Config(_) => false,
        }
    }
}
