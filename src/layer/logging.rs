//! Request logging for the dispatcher service

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use bytes::Bytes;
use tower_layer::Layer;
use tower_service::Service;
use tracing::{debug, info};

/// Layer that logs every inbound request body and outbound response
#[derive(Clone, Debug, Default)]
pub struct RequestLoggingLayer;

impl RequestLoggingLayer {
    /// Create a new logging layer
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for RequestLoggingLayer {
    type Service = RequestLoggingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLoggingService { inner }
    }
}

/// Logging service that wraps an inner byte service
#[derive(Clone, Debug)]
pub struct RequestLoggingService<S> {
    inner: S,
}

impl<S> Service<Bytes> for RequestLoggingService<S>
where
    S: Service<Bytes, Response = Bytes> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Bytes;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, body: Bytes) -> Self::Future {
        info!(bytes = body.len(), "inbound rpc request");
        if let Ok(text) = std::str::from_utf8(&body) {
            debug!(body = %text, "request body");
        }

        let mut inner = self.inner.clone();
        Box::pin(async move {
            let response = inner.call(body).await?;
            info!(bytes = response.len(), "outbound rpc response");
            Ok(response)
        })
    }
}
