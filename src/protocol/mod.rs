//! Core protocol types for the agent's A2A dialect

use serde::{Deserialize, Serialize};

pub mod agent;
pub mod error;
pub mod message;
pub mod rpc;
pub mod task;

pub use agent::{AgentCapabilities, AgentCard};
pub use error::AgentError;
pub use message::{Message, MessageParams, MessagePart, Role};
pub use rpc::{InboundRequest, JsonRpcRequest, JsonRpcResponse, RpcError};
pub use task::{TaskResult, TaskState, TaskStatus};

/// Artifacts carry a task's generated output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artifact {
    /// Unique identifier of the Artifact
    #[serde(rename = "artifactId")]
    pub artifact_id: String,

    /// A human readable name for the Artifact
    pub name: String,

    /// Contents of the Artifact
    pub parts: Vec<MessagePart>,
}
