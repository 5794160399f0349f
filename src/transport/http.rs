//! HTTP binding for the dispatcher
//!
//! The A2A route always answers 200 with a JSON body; protocol errors ride
//! inside the response envelope. Only the agent card and health probe live
//! beside it.

use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower::{util::BoxCloneSyncService, ServiceExt};

use crate::protocol::agent::AgentCard;

/// The dispatcher (plus any layers) boxed for the router's state
pub type RpcService = BoxCloneSyncService<Bytes, Bytes, Infallible>;

#[derive(Clone)]
struct AppState {
    rpc: RpcService,
    card: AgentCard,
}

/// Build the agent's HTTP surface
pub fn router(rpc: RpcService, card: AgentCard) -> Router {
    Router::new()
        .route("/a2a/profiler", post(handle_rpc))
        .route("/.well-known/agent.json", get(agent_card))
        .route("/health", get(health))
        .with_state(AppState { rpc, card })
}

async fn handle_rpc(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let response = match state.rpc.oneshot(body).await {
        Ok(bytes) => bytes,
        Err(never) => match never {},
    };

    ([(header::CONTENT_TYPE, "application/json")], response)
}

async fn agent_card(State(state): State<AppState>) -> Json<AgentCard> {
    Json(state.card)
}

async fn health() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tower::Layer;

    use super::*;
    use crate::{
        extract::IdeaExtractor,
        generate::mock::MockGenerator,
        layer::RequestLoggingLayer,
        profile::ProfileResponse,
        protocol::agent::profiler_card,
        service::Dispatcher,
    };

    #[test]
    fn test_router_builds_over_layered_dispatcher() {
        let dispatcher = Dispatcher::new(
            Arc::new(MockGenerator::new(|idea| {
                Ok(ProfileResponse::single(idea, Default::default()))
            })),
            IdeaExtractor::default(),
        );

        let rpc = RpcService::new(RequestLoggingLayer::new().layer(dispatcher));
        let card = profiler_card("http://localhost:8080/a2a/profiler".parse().unwrap());

        let _router = router(rpc, card);
    }
}
