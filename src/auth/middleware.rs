//! Session gate.
//!
//! Resolves the session cookie to a [`CurrentUser`] and attaches it to the
//! request. Requests without a live session are redirected to `/login`.

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::auth::session::{CurrentUser, SessionId};
use crate::http::server::AppState;

pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let user = session_id_from_headers(req.headers(), &state.config.session.cookie_name)
        .and_then(|id| state.sessions.get(id));

    match user {
        Some(user) => {
            req.extensions_mut().insert::<CurrentUser>(user);
            next.run(req).await
        }
        None => {
            tracing::debug!(path = %req.uri().path(), "No session, redirecting to login");
            Redirect::to("/login").into_response()
        }
    }
}

/// Find the session id in the `Cookie` headers.
pub fn session_id_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| SessionId::parse(value.trim_matches('"')))
}

/// `Set-Cookie` value starting a session.
pub fn session_cookie(cookie_name: &str, id: SessionId) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", cookie_name, id)
}

/// `Set-Cookie` value telling the browser to forget the session.
pub fn clear_cookie(cookie_name: &str) -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", cookie_name)
}
