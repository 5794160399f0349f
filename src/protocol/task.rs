//! Task result types and builders

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    message::{Message, MessagePart},
    Artifact,
};

/// Wire value of [`TaskResult::kind`]
pub const TASK_KIND: &str = "task";

/// Name given to the artifact duplicating the generated profile text
const ARTIFACT_NAME: &str = "Customer Profile Data";

/// Outcome of a task request
///
/// Every response, success or failure, is framed in a `TaskResult` whose
/// `id` is the correlation token of the request that produced it. Results
/// are built fresh per request and never mutated after being sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskResult {
    /// Correlation token echoed from the request
    pub id: String,

    /// Optional context ID for grouping related tasks
    #[serde(rename = "contextId", default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,

    /// Terminal status of the task
    pub status: TaskStatus,

    /// Artifacts carrying the generated output (empty on failure)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,

    /// Always "task"
    pub kind: String,
}

impl TaskResult {
    /// Build a successful result carrying the rendered profile text
    ///
    /// The text appears twice, as the status message and as an artifact,
    /// so callers can consume whichever surface they prefer.
    pub fn completed(id: impl Into<String>, content: impl Into<String>) -> Self {
        let id = id.into();
        let content = content.into();

        let message = Message::agent(content.clone())
            .with_message_id(Uuid::now_v7().to_string())
            .with_task_id(id.clone());

        Self {
            id,
            context_id: None,
            status: TaskStatus {
                state: TaskState::Completed,
                timestamp: Utc::now(),
                message: Some(message),
            },
            artifacts: vec![Artifact {
                artifact_id: Uuid::now_v7().to_string(),
                name: ARTIFACT_NAME.to_string(),
                parts: vec![MessagePart::text(content)],
            }],
            kind: TASK_KIND.to_string(),
        }
    }

    /// Build a failed result carrying a human-readable explanation
    pub fn failed(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            context_id: None,
            status: TaskStatus {
                state: TaskState::Failed,
                timestamp: Utc::now(),
                message: Some(Message::agent(reason)),
            },
            artifacts: Vec::new(),
            kind: TASK_KIND.to_string(),
        }
    }

    /// Check if the result is in a terminal state
    pub fn is_terminal(&self) -> bool {
        self.status.state.is_terminal()
    }
}

/// Status block of a task result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskStatus {
    /// Lifecycle state of the task
    pub state: TaskState,

    /// When the status was produced (UTC, RFC 3339)
    pub timestamp: DateTime<Utc>,

    /// Agent-authored message describing the outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

/// Task lifecycle states
///
/// The full protocol lifecycle is modeled for wire compatibility, but this
/// agent only ever produces `completed` and `failed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskState {
    /// Task is currently being processed
    Working,

    /// Task requires additional input from the caller
    InputRequired,

    /// Task completed successfully
    Completed,

    /// Task failed with an error
    Failed,
}

impl TaskState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Completed | TaskState::Failed)
    }
}
