//! JSON-RPC 2.0 envelope for the A2A binding
//!
//! Requests arrive wrapped in JSON-RPC 2.0 envelopes. Some integrations
//! skip the wrapper and post the message parameters directly, so inbound
//! bytes resolve to a sum type: the strict envelope parse is tried first,
//! then the bare-message form.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{error::AgentError, message::MessageParams, task::TaskResult};

/// The only accepted protocol version
pub const JSONRPC_VERSION: &str = "2.0";

/// Method name for task requests
pub const METHOD_AGENT_TASK: &str = "agent/task";

/// Alternate method name accepted for the same task handler
pub const METHOD_MESSAGE_SEND: &str = "message/send";

/// Correlation id used when a request arrived without an envelope
pub const DIRECT_MESSAGE_ID: &str = "direct-message";

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcRequest {
    /// Protocol version; must equal [`JSONRPC_VERSION`]
    pub jsonrpc: String,

    /// Caller-supplied correlation token, echoed verbatim in the response
    #[serde(default)]
    pub id: String,

    /// Method name to dispatch on
    pub method: String,

    /// Method parameters, decoded by the routed handler
    #[serde(default)]
    pub params: Value,
}

/// JSON-RPC 2.0 response envelope
///
/// Exactly one of `result` and `error` is present. Either way the
/// transport status is success; errors travel in-band.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcResponse {
    /// Always [`JSONRPC_VERSION`]
    pub jsonrpc: String,

    /// Correlation token echoed from the request
    pub id: String,

    /// Task result on the success path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TaskResult>,

    /// Error object on the framing-failure path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl JsonRpcResponse {
    /// Build a success response carrying a task result
    pub fn success(id: impl Into<String>, result: TaskResult) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.into(),
            result: Some(result),
            error: None,
        }
    }

    /// Build an error response
    pub fn error(id: impl Into<String>, error: RpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.into(),
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcError {
    /// Reserved error code
    pub code: i64,

    /// Human-readable explanation
    pub message: String,
}

impl RpcError {
    /// The request body was not parseable in any accepted shape
    pub const PARSE_ERROR: i64 = -32700;

    /// The envelope was readable but malformed (e.g. wrong version)
    pub const INVALID_REQUEST: i64 = -32600;

    /// The method is not one this agent serves
    pub const METHOD_NOT_FOUND: i64 = -32601;

    /// The params did not decode as message parameters
    pub const INVALID_PARAMS: i64 = -32602;

    /// Response encoding failed (should not happen)
    pub const INTERNAL_ERROR: i64 = -32603;

    /// Build a parse error
    pub fn parse_error() -> Self {
        Self {
            code: Self::PARSE_ERROR,
            message: "Invalid request format".to_string(),
        }
    }

    /// Build an invalid-request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            code: Self::INVALID_REQUEST,
            message: message.into(),
        }
    }

    /// Build a method-not-found error naming the rejected method
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: Self::METHOD_NOT_FOUND,
            message: format!("Method not found: {method}"),
        }
    }

    /// Build an invalid-params error
    pub fn invalid_params() -> Self {
        Self {
            code: Self::INVALID_PARAMS,
            message: "Invalid parameters".to_string(),
        }
    }
}

/// An inbound request resolved to one of its two accepted shapes
#[derive(Debug, Clone, PartialEq)]
pub enum InboundRequest {
    /// A full JSON-RPC envelope
    Envelope(JsonRpcRequest),

    /// Bare message parameters posted without an envelope
    Bare(MessageParams),
}

impl InboundRequest {
    /// Resolve raw bytes to a request shape
    ///
    /// The strict envelope parse runs first; a body without `jsonrpc` and
    /// `method` fields falls through to the bare-message parse. Only when
    /// both fail is the request unparseable.
    pub fn parse(body: &[u8]) -> Result<Self, AgentError> {
        match serde_json::from_slice::<JsonRpcRequest>(body) {
            Ok(envelope) => Ok(Self::Envelope(envelope)),
            Err(envelope_err) => {
                debug!(%envelope_err, "envelope parse failed, trying bare message");
                let params = serde_json::from_slice::<MessageParams>(body)?;
                Ok(Self::Bare(params))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_envelope() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": "req-1",
            "method": "message/send",
            "params": {"message": {"kind": "message", "role": "user", "parts": []}}
        });

        let parsed = InboundRequest::parse(&serde_json::to_vec(&body).unwrap()).unwrap();
        match parsed {
            InboundRequest::Envelope(req) => {
                assert_eq!(req.jsonrpc, "2.0");
                assert_eq!(req.id, "req-1");
                assert_eq!(req.method, METHOD_MESSAGE_SEND);
            }
            _ => panic!("Expected envelope"),
        }
    }

    #[test]
    fn test_parse_envelope_without_id() {
        let body = json!({"jsonrpc": "2.0", "method": "agent/task", "params": {}});
        let parsed = InboundRequest::parse(&serde_json::to_vec(&body).unwrap()).unwrap();
        match parsed {
            InboundRequest::Envelope(req) => assert_eq!(req.id, ""),
            _ => panic!("Expected envelope"),
        }
    }

    #[test]
    fn test_parse_falls_back_to_bare_message() {
        let body = json!({
            "message": {
                "kind": "message",
                "role": "user",
                "parts": [{"kind": "text", "text": "A tea subscription box"}]
            },
            "configuration": {"blocking": true}
        });

        let parsed = InboundRequest::parse(&serde_json::to_vec(&body).unwrap()).unwrap();
        match parsed {
            InboundRequest::Bare(params) => {
                assert!(params.configuration.blocking);
                assert_eq!(params.message.parts.len(), 1);
            }
            _ => panic!("Expected bare message"),
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(InboundRequest::parse(b"not json at all").is_err());
        assert!(InboundRequest::parse(b"{\"neither\": \"shape\"}").is_err());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(RpcError::parse_error().code, -32700);
        assert_eq!(RpcError::invalid_request("bad version").code, -32600);
        assert_eq!(RpcError::method_not_found("task/list").code, -32601);
        assert_eq!(RpcError::invalid_params().code, -32602);

        let err = RpcError::method_not_found("task/list");
        assert_eq!(err.message, "Method not found: task/list");
    }

    #[test]
    fn test_response_serialization() {
        let response = JsonRpcResponse::error("req-9", RpcError::invalid_params());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["id"], "req-9");
        assert_eq!(json["error"]["code"], -32602);
        assert!(json.get("result").is_none());
    }
}
