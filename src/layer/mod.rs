//! Tower Layer implementations

pub mod logging;

pub use logging::{RequestLoggingLayer, RequestLoggingService};
