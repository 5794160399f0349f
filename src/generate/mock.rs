use std::sync::Arc;

use async_trait::async_trait;

use super::ProfileGenerator;
use crate::{profile::ProfileResponse, protocol::error::AgentError};

/// Closure-driven generator for unit tests
///
/// Lets tests script the generation outcome without a network connection
/// or a live model backend.
#[derive(Clone)]
pub(crate) struct MockGenerator {
    handler: Arc<dyn Fn(&str) -> Result<ProfileResponse, AgentError> + Send + Sync>,
}

impl MockGenerator {
    /// Create a mock generator with a custom handler
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&str) -> Result<ProfileResponse, AgentError> + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }
}

#[async_trait]
impl ProfileGenerator for MockGenerator {
    async fn generate(&self, idea: &str) -> Result<ProfileResponse, AgentError> {
        (self.handler)(idea)
    }
}

impl std::fmt::Debug for MockGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockGenerator").finish()
    }
}
