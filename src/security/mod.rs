//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → limits.rs (reject oversized bodies)
//!     → headers.rs (CORS preflight / response headers)
//!     → Pass to handlers
//! ```

pub mod headers;
pub mod limits;
