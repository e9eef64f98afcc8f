//! Accounts and sessions.
//!
//! # Data Flow
//! ```text
//! POST /register → validation.rs → DataStore::register → session.rs (new session)
//! POST /login    → DataStore::load_users → session.rs (new session)
//! any gated path → middleware.rs (cookie → CurrentUser | redirect /login)
//! GET /logout    → session.rs (remove) → redirect /login
//! ```
//!
//! # Design Decisions
//! - Sessions are server-side; the cookie carries only a random id
//! - Passwords are compared as stored; hardening is out of scope

pub mod handlers;
pub mod middleware;
pub mod session;
pub mod validation;

use axum::routing::get;
use axum::Router;

use crate::http::pages;
use crate::http::server::AppState;

pub use middleware::require_session;
pub use session::{CurrentUser, SessionId, SessionStore};

/// Routes reachable without a session.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(pages::login_page).post(handlers::login))
        .route("/register", get(pages::register_page).post(handlers::register))
        .route("/logout", get(handlers::logout))
}

/// Routes that need the session gate.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/me", get(handlers::me))
}
