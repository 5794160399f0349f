//! The profile-generation capability

pub mod gemini;
#[cfg(test)]
pub(crate) mod mock;

pub use gemini::GeminiGenerator;

use async_trait::async_trait;

use crate::{profile::ProfileResponse, protocol::error::AgentError};

/// Capability that turns a business idea into customer profiles
///
/// The dispatcher depends only on this trait; production wiring plugs in
/// [`GeminiGenerator`], tests plug in a stub. Implementations are expected
/// to bound their own latency; a timeout surfaces to the caller as an
/// error, which the dispatcher reports as a failed task.
#[async_trait]
pub trait ProfileGenerator: Send + Sync {
    /// Generate customer profiles for a business idea
    async fn generate(&self, idea: &str) -> Result<ProfileResponse, AgentError>;
}
