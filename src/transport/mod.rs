//! HTTP surface for the agent

pub mod http;

pub use http::{router, RpcService};
