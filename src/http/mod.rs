//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, span, JSON body decoding)
//!     → auth / assistant handlers
//!     → response.rs / pages.rs (JSON envelopes, HTML)
//!     → error.rs (failures → status + fail envelope)
//! ```

pub mod error;
pub mod pages;
pub mod request;
pub mod response;
pub mod server;

pub use error::{AppError, AppResult};
pub use request::{JsonBody, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
