//! HR Helpdesk Library
//!
//! A session-authenticated HR self-service assistant served over HTTP.

pub mod assistant;
pub mod auth;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;
pub mod store;

pub use config::HelpdeskConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
