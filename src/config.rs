//! Process configuration

use std::env;

use crate::protocol::error::AgentError;

const ENV_API_KEY: &str = "GEMINI_API_KEY";
const ENV_PORT: &str = "PORT";
const DEFAULT_PORT: u16 = 8080;

/// Read-once process configuration for the server binary
///
/// Loaded at startup and treated as read-only thereafter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// API key for the generation backend
    pub api_key: String,

    /// Port the HTTP server binds
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, AgentError> {
        let api_key = env::var(ENV_API_KEY).map_err(|_| {
            AgentError::Config(format!("{ENV_API_KEY} environment variable is required"))
        })?;

        let port = match env::var(ENV_PORT) {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AgentError::Config(format!("invalid {ENV_PORT} value: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { api_key, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_when_unset() {
        env::remove_var(ENV_PORT);
        env::set_var(ENV_API_KEY, "test-key");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.api_key, "test-key");
    }
}
