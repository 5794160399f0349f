//! A2A message types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A message in the A2A protocol
///
/// Messages are the primary unit of communication with the agent. Each
/// message has a role (user or agent) and one or more parts (text or
/// structured data). The `kind` and `role` fields are carried through as
/// received and never gated on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Message kind as sent by the caller (typically "message")
    #[serde(default)]
    pub kind: String,

    /// Role of the message sender
    #[serde(default)]
    pub role: Role,

    /// Message content parts
    #[serde(default)]
    pub parts: Vec<MessagePart>,

    /// Optional message identifier
    #[serde(rename = "messageId", default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// Optional task identifier (for associating message with a task)
    #[serde(rename = "taskId", default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

impl Message {
    /// Create a new message with text content
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            kind: "message".to_string(),
            role,
            parts: vec![MessagePart::text(text)],
            message_id: None,
            task_id: None,
        }
    }

    /// Create a user message with text content
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Create an agent message with text content
    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Role::Agent, text)
    }

    /// Set the message ID
    pub fn with_message_id(mut self, id: impl Into<String>) -> Self {
        self.message_id = Some(id.into());
        self
    }

    /// Set the task ID
    pub fn with_task_id(mut self, id: impl Into<String>) -> Self {
        self.task_id = Some(id.into());
        self
    }

    /// Add a message part
    pub fn with_part(mut self, part: MessagePart) -> Self {
        self.parts.push(part);
        self
    }
}

/// Role of a message sender
///
/// Unrecognized roles deserialize to [`Role::Unknown`] instead of failing
/// the whole message.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message from a user
    #[default]
    User,

    /// Message from this agent
    Agent,

    /// Any other role a caller might send
    Unknown,
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let role = String::deserialize(deserializer)?;
        Ok(match role.as_str() {
            "user" => Role::User,
            "agent" => Role::Agent,
            _ => Role::Unknown,
        })
    }
}

/// A part of a message, discriminated by its `kind` field
///
/// Payload fields are optional on the wire; a `text` part without text is
/// carried but contributes nothing. Part kinds this agent does not
/// interpret deserialize to [`MessagePart::Unknown`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MessagePart {
    /// Text content
    Text {
        /// The text content
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },

    /// Structured data, possibly an embedded conversation history
    Data {
        /// The structured data
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<Value>,
    },

    /// A part kind this agent does not interpret (e.g. "file")
    #[serde(other)]
    Unknown,
}

impl MessagePart {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: Some(text.into()),
        }
    }

    /// Create a data part
    pub fn data(data: Value) -> Self {
        Self::Data { data: Some(data) }
    }
}

/// Parameters of a task request: the message plus caller preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageParams {
    /// The message to process
    pub message: Message,

    /// Caller preferences for how the task should run
    #[serde(default)]
    pub configuration: MessageConfiguration,
}

/// Caller preferences carried alongside a message
///
/// Accepted and echoed for protocol compatibility; this agent always
/// responds synchronously with text output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageConfiguration {
    /// Output modes the caller can accept
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accepted_output_modes: Vec<String>,

    /// How much history the caller wants replayed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_length: Option<u32>,

    /// Whether the caller wants a blocking response
    #[serde(default)]
    pub blocking: bool,
}
