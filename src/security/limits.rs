//! Request limits.
//!
//! # Responsibilities
//! - Enforce maximum request body size
//! - Enforce total request time
//!
//! # Design Decisions
//! - Oversized bodies are rejected with 413 before reaching handlers

use std::time::Duration;

use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

use crate::config::HelpdeskConfig;

#[allow(deprecated)]
pub fn with_limits<S>(router: Router<S>, config: &HelpdeskConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
}
