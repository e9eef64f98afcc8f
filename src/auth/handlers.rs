use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Extension, Json};
use serde::Deserialize;

use crate::auth::middleware::{clear_cookie, session_cookie, session_id_from_headers};
use crate::auth::session::CurrentUser;
use crate::auth::validation::{
    build_employee_id, next_employee_id, validate_email_format, validate_password,
};
use crate::http::error::AppResult;
use crate::http::request::JsonBody;
use crate::http::response::{MeReply, StatusReply};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::store::NewAccount;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Please check email/password.";
pub const MISSING_FIELDS: &str = "Please fill all required fields.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const EMAIL_TAKEN: &str = "Email already registered. Please login.";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub employee_id: Option<String>,
}

/// Emails are keys: trimmed and lower-cased everywhere.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Replace any session the client already holds with a fresh one.
fn start_session(state: &AppState, headers: &HeaderMap, email: &str, name: &str) -> String {
    let cookie_name = &state.config.session.cookie_name;
    if let Some(old) = session_id_from_headers(headers, cookie_name) {
        state.sessions.remove(old);
    }
    let id = state.sessions.create(email, name);
    session_cookie(cookie_name, id)
}

pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AppResult<Response> {
    let email = normalize_email(req.email.as_deref().unwrap_or_default());
    let password = req.password.unwrap_or_default();

    let users = state.store.load_users()?;
    let Some(user) = users.get(&email).filter(|user| user.password == password) else {
        metrics::record_auth_event("login", "fail");
        tracing::info!(email = %email, "Login rejected");
        return Ok(Json(StatusReply::fail(INVALID_CREDENTIALS)).into_response());
    };

    let name = user.name.as_deref().unwrap_or(&email);
    let cookie = start_session(&state, &headers, &email, name);
    metrics::record_auth_event("login", "success");
    tracing::info!(email = %email, "User logged in");

    Ok(([(header::SET_COOKIE, cookie)], Json(StatusReply::success())).into_response())
}

pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> AppResult<Response> {
    let name = req.name.as_deref().unwrap_or_default().trim().to_string();
    let email = normalize_email(req.email.as_deref().unwrap_or_default());
    let password = req.password.unwrap_or_default();

    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Ok(reject(MISSING_FIELDS));
    }
    if !validate_email_format(&email) {
        return Ok(reject(INVALID_EMAIL));
    }
    if let Err(message) = validate_password(&password) {
        return Ok(reject(message));
    }

    let account = NewAccount {
        name: name.clone(),
        password,
        employee_id: build_employee_id(req.employee_id.as_deref().unwrap_or_default()),
    };
    let Some(employee_id) = state.store.register(&email, account, next_employee_id)? else {
        return Ok(reject(EMAIL_TAKEN));
    };

    let cookie = start_session(&state, &headers, &email, &name);
    metrics::record_auth_event("register", "success");
    tracing::info!(email = %email, employee_id = %employee_id, "User registered");

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(StatusReply::success().with_employee_id(employee_id)),
    )
        .into_response())
}

fn reject(message: &str) -> Response {
    metrics::record_auth_event("register", "fail");
    Json(StatusReply::fail(message)).into_response()
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cookie_name = &state.config.session.cookie_name;
    if let Some(id) = session_id_from_headers(&headers, cookie_name) {
        state.sessions.remove(id);
        metrics::record_auth_event("logout", "success");
    }
    (
        [(header::SET_COOKIE, clear_cookie(cookie_name))],
        Redirect::to("/login"),
    )
        .into_response()
}

pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<MeReply> {
    Json(MeReply {
        email: user.email,
        name: user.name,
    })
}
