//! Core request dispatcher
//!
//! The dispatcher is the sole entry point a transport adapter needs: bytes
//! in, bytes out. It validates envelope framing, routes by method, falls
//! back to the schema-less direct-message path when framing fails, and
//! serializes the JSON-RPC response. Every path returns a value: protocol
//! errors are themselves response values, so the transport always answers
//! with success status and errors travel in-band.

use std::{
    convert::Infallible,
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use bytes::Bytes;
use tower_service::Service;
use tracing::{error, info, warn};

use crate::{
    extract::IdeaExtractor,
    generate::ProfileGenerator,
    profile::format_profiles,
    protocol::{
        rpc::{
            InboundRequest, JsonRpcRequest, JsonRpcResponse, RpcError, DIRECT_MESSAGE_ID,
            JSONRPC_VERSION, METHOD_AGENT_TASK, METHOD_MESSAGE_SEND,
        },
        MessageParams, TaskResult,
    },
};

/// Reply sent when a request carried no recoverable business idea
const MISSING_IDEA_REPLY: &str = "Please provide a business idea to generate customer profiles.";

/// Dispatches inbound A2A requests to the profile generator
///
/// Stateless across calls: the generator handle and extractor are injected
/// once at construction and shared read-only, so clones serve concurrent
/// requests independently.
#[derive(Clone)]
pub struct Dispatcher {
    generator: Arc<dyn ProfileGenerator>,
    extractor: IdeaExtractor,
}

impl Dispatcher {
    /// Create a dispatcher over a generation capability
    pub fn new(generator: Arc<dyn ProfileGenerator>, extractor: IdeaExtractor) -> Self {
        Self {
            generator,
            extractor,
        }
    }

    /// Process one raw request body into a response envelope
    pub async fn dispatch(&self, body: &[u8]) -> JsonRpcResponse {
        match InboundRequest::parse(body) {
            Ok(InboundRequest::Envelope(envelope)) => self.handle_envelope(envelope).await,
            Ok(InboundRequest::Bare(params)) => {
                info!("handling bare message with synthetic correlation id");
                let result = self.handle_message(DIRECT_MESSAGE_ID, params).await;
                JsonRpcResponse::success(DIRECT_MESSAGE_ID, result)
            }
            Err(err) => {
                warn!(%err, "request matched neither envelope nor bare message");
                JsonRpcResponse::error("", RpcError::parse_error())
            }
        }
    }

    async fn handle_envelope(&self, envelope: JsonRpcRequest) -> JsonRpcResponse {
        if envelope.jsonrpc != JSONRPC_VERSION {
            warn!(version = %envelope.jsonrpc, "rejected envelope with bad protocol version");
            return JsonRpcResponse::error(
                envelope.id,
                RpcError::invalid_request("Invalid JSON-RPC version"),
            );
        }

        match envelope.method.as_str() {
            METHOD_AGENT_TASK | METHOD_MESSAGE_SEND => {
                let params: MessageParams = match serde_json::from_value(envelope.params) {
                    Ok(params) => params,
                    Err(err) => {
                        warn!(%err, "params did not decode as message parameters");
                        return JsonRpcResponse::error(envelope.id, RpcError::invalid_params());
                    }
                };

                let result = self.handle_message(&envelope.id, params).await;
                JsonRpcResponse::success(envelope.id, result)
            }
            other => {
                warn!(method = %other, "rejected unknown method");
                JsonRpcResponse::error(envelope.id, RpcError::method_not_found(other))
            }
        }
    }

    /// Run the task: extract the idea, generate, wrap the outcome
    ///
    /// Domain failures (missing idea, generator error) come back as failed
    /// task results, not RPC errors: the request was understood, it just
    /// could not be completed.
    async fn handle_message(&self, id: &str, params: MessageParams) -> TaskResult {
        let idea = self.extractor.extract(&params.message);
        if idea.is_empty() {
            warn!("no business idea found in message");
            return TaskResult::failed(id, MISSING_IDEA_REPLY);
        }

        info!(%idea, "generating customer profiles");
        match self.generator.generate(&idea).await {
            Ok(profiles) => TaskResult::completed(id, format_profiles(&profiles)),
            Err(err) => {
                error!(%err, "profile generation failed");
                TaskResult::failed(id, format!("Failed to generate customer profiles: {err}"))
            }
        }
    }

    /// Serialize a response envelope to bytes
    fn encode(response: &JsonRpcResponse) -> Bytes {
        match serde_json::to_vec(response) {
            Ok(bytes) => Bytes::from(bytes),
            Err(err) => {
                error!(%err, "failed to encode response envelope");
                Bytes::from_static(
                    br#"{"jsonrpc":"2.0","id":"","error":{"code":-32603,"message":"Internal error"}}"#,
                )
            }
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("extractor", &self.extractor)
            .finish()
    }
}

impl Service<Bytes> for Dispatcher {
    type Response = Bytes;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, body: Bytes) -> Self::Future {
        let this = self.clone();

        Box::pin(async move {
            let response = this.dispatch(&body).await;
            Ok(Self::encode(&response))
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        generate::mock::MockGenerator,
        profile::{CustomerProfile, ProfileResponse},
        protocol::{error::AgentError, TaskState},
    };

    fn dispatcher_with<F>(handler: F) -> Dispatcher
    where
        F: Fn(&str) -> Result<ProfileResponse, AgentError> + Send + Sync + 'static,
    {
        Dispatcher::new(
            Arc::new(MockGenerator::new(handler)),
            IdeaExtractor::default(),
        )
    }

    fn ok_dispatcher() -> Dispatcher {
        dispatcher_with(|idea| {
            Ok(ProfileResponse::single(
                idea,
                CustomerProfile {
                    age: "30-50".to_string(),
                    ..Default::default()
                },
            ))
        })
    }

    fn task_body(id: &str, method: &str, idea: &str) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": {
                "message": {
                    "kind": "message",
                    "role": "user",
                    "parts": [{"kind": "text", "text": idea}]
                }
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_task_request_completes() {
        let dispatcher = ok_dispatcher();
        let response = dispatcher
            .dispatch(&task_body("req-1", "agent/task", "A pet care app"))
            .await;

        assert_eq!(response.id, "req-1");
        assert!(response.error.is_none());

        let result = response.result.unwrap();
        assert_eq!(result.id, "req-1");
        assert_eq!(result.status.state, TaskState::Completed);
    }

    #[tokio::test]
    async fn test_version_gate() {
        let dispatcher = ok_dispatcher();
        let body = serde_json::to_vec(&json!({
            "jsonrpc": "1.0",
            "id": "req-2",
            "method": "agent/task",
            "params": {}
        }))
        .unwrap();

        let response = dispatcher.dispatch(&body).await;
        assert_eq!(response.id, "req-2");
        assert_eq!(response.error.unwrap().code, RpcError::INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_generator_error_becomes_failed_task() {
        let dispatcher =
            dispatcher_with(|_| Err(AgentError::Generation("quota exhausted".to_string())));

        let response = dispatcher
            .dispatch(&task_body("req-3", "message/send", "A pet care app"))
            .await;

        let result = response.result.unwrap();
        assert_eq!(result.status.state, TaskState::Failed);

        let text = serde_json::to_string(&result.status.message).unwrap();
        assert!(text.contains("Failed to generate customer profiles"));
        assert!(text.contains("quota exhausted"));
    }

    #[tokio::test]
    async fn test_service_impl_returns_encoded_response() {
        let mut service = ok_dispatcher();
        let body = Bytes::from(task_body("req-4", "message/send", "A pet care app"));

        let bytes = service.call(body).await.unwrap();
        let response: JsonRpcResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(response.id, "req-4");
        assert!(response.result.is_some());
    }
}
