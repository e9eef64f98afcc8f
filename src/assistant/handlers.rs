use axum::extract::State;
use axum::response::Html;
use axum::{Extension, Json};
use serde::Deserialize;

use crate::auth::handlers::normalize_email;
use crate::auth::session::CurrentUser;
use crate::http::error::AppResult;
use crate::http::pages::render_index;
use crate::http::request::JsonBody;
use crate::http::response::{AskReply, StatusReply};
use crate::http::server::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AskRequest {
    pub message: Option<String>,
    /// Ask on behalf of another employee. Falls back to the session user.
    pub email: Option<String>,
}

pub async fn index(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Html<String>> {
    let policies = state.store.load_policies()?;
    Ok(Html(render_index(&user.name, &policies)))
}

pub async fn ask(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    JsonBody(req): JsonBody<AskRequest>,
) -> AppResult<Json<AskReply>> {
    let message = req.message.unwrap_or_default();
    let email = target_email(req.email, user.email);

    let reply = state.assistant.reply(message.trim(), &email)?;
    Ok(Json(AskReply { reply }))
}

/// A non-empty body `email` wins over the session email. It is normalized
/// after the choice, so a blank override names nobody.
fn target_email(requested: Option<String>, session_email: String) -> String {
    let email = requested
        .filter(|email| !email.is_empty())
        .unwrap_or(session_email);
    normalize_email(&email)
}

pub async fn reset() -> Json<StatusReply> {
    Json(StatusReply::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_email() {
        let session = || "admin@example.com".to_string();

        assert_eq!(target_email(None, session()), "admin@example.com");
        assert_eq!(target_email(Some(String::new()), session()), "admin@example.com");
        assert_eq!(
            target_email(Some(" Kavya@Corp.io ".into()), session()),
            "kavya@corp.io"
        );
        assert_eq!(target_email(Some("   ".into()), session()), "");
    }
}
