//! Error types for agent operations

use thiserror::Error;

/// Main error type for agent operations
#[derive(Debug, Error)]
pub enum AgentError {
    /// The generation capability failed or returned unusable content
    #[error("Generation error: {0}")]
    Generation(String),

    /// Transport-level error (network, connection, etc.)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request timeout against the generation backend
    #[error("Request timeout")]
    Timeout,

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid or missing process configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for agent operations
pub type AgentResult<T> = Result<T, AgentError>;

impl From<reqwest::Error> for AgentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AgentError::Timeout
        } else if err.is_connect() {
            AgentError::Transport(format!("Connection error: {}", err))
        } else {
            AgentError::Transport(err.to_string())
        }
    }
}
