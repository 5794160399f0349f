//! # Profiler Agent
//!
//! An A2A-protocol agent that generates a customer persona from a
//! free-text business idea.
//!
//! The crate sits between an inbound JSON-RPC-style envelope and a single
//! downstream text-generation call:
//!
//! - **Dispatch**: [`service::Dispatcher`] validates framing, routes by
//!   method, and falls back to a schema-less direct-message path when the
//!   envelope parse fails. It is a `tower` `Service<Bytes>`, so layers and
//!   transports compose over it.
//! - **Extraction**: [`extract::IdeaExtractor`] recovers the caller's idea
//!   from plain text parts or from conversation history embedded as data
//!   parts, with a configurable noise filter.
//! - **Generation**: [`generate::ProfileGenerator`] is the seam to the
//!   model backend; [`generate::GeminiGenerator`] is the production
//!   implementation.
//!
//! Every response, success or failure, is a `TaskResult` delivered with
//! transport-success status; errors travel in-band per the protocol's
//! error-object convention.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use profiler_agent::prelude::*;
//!
//! # use async_trait::async_trait;
//! # use profiler_agent::profile::ProfileResponse;
//! # struct Stub;
//! # #[async_trait]
//! # impl ProfileGenerator for Stub {
//! #     async fn generate(&self, idea: &str) -> Result<ProfileResponse, AgentError> {
//! #         Ok(ProfileResponse::single(idea, Default::default()))
//! #     }
//! # }
//! # #[tokio::main]
//! # async fn main() {
//! let dispatcher = Dispatcher::new(Arc::new(Stub), IdeaExtractor::default());
//!
//! let body = br#"{"jsonrpc": "2.0", "id": "req-1", "method": "message/send",
//!     "params": {"message": {"kind": "message", "role": "user",
//!     "parts": [{"kind": "text", "text": "A pet care app"}]}}}"#;
//!
//! let response = dispatcher.dispatch(body).await;
//! assert_eq!(response.id, "req-1");
//! # }
//! ```

pub mod config;
pub mod extract;
pub mod generate;
pub mod layer;
pub mod profile;
pub mod protocol;
pub mod service;
pub mod transport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        extract::{IdeaExtractor, NoiseFilter},
        generate::ProfileGenerator,
        protocol::error::AgentError,
        protocol::{Message, MessagePart, Role, TaskResult, TaskState},
        service::Dispatcher,
    };
}
