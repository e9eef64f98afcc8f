//! HTTP server setup.
//!
//! # Responsibilities
//! - Open the data store and build shared application state
//! - Create the Axum Router with public and session-gated routes
//! - Wire up middleware (tracing, request ID, limits, security headers, metrics)
//! - Serve until the shutdown signal fires
//! - Sweep idle sessions in the background

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::assistant::{self, Assistant};
use crate::auth::{self, SessionStore};
use crate::config::HelpdeskConfig;
use crate::http::request::with_request_tracing;
use crate::observability::metrics;
use crate::security::{headers, limits};
use crate::store::{DataStore, StoreError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HelpdeskConfig>,
    pub store: Arc<DataStore>,
    pub sessions: SessionStore,
    pub assistant: Arc<Assistant>,
}

/// HTTP server for the helpdesk.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server, seeding the data directory if needed.
    pub fn new(config: HelpdeskConfig) -> Result<Self, StoreError> {
        let store = Arc::new(DataStore::open(&config.storage.data_dir)?);
        let state = AppState {
            sessions: SessionStore::new(config.session.ttl_secs),
            assistant: Arc::new(Assistant::new(store.clone())),
            store,
            config: Arc::new(config),
        };

        let router = Self::build_router(state.clone());
        Ok(Self { router, state })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let config = state.config.clone();

        let gated = auth::protected_routes()
            .merge(assistant::routes())
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth::require_session,
            ));

        let mut router = Router::new()
            .merge(auth::public_routes())
            .merge(gated)
            .layer(middleware::from_fn(metrics::track_requests));

        router = limits::with_limits(router, &config);
        if config.security.enable_headers {
            router = headers::with_security_headers(router);
        }
        if config.security.cors_permissive {
            router = headers::with_permissive_cors(router);
        }

        with_request_tracing(router).with_state(state)
    }

    /// A copy of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            data_dir = %self.state.store.dir().display(),
            "HTTP server starting"
        );

        let sweeper = spawn_session_sweeper(&self.state);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        if let Some(handle) = sweeper {
            handle.abort();
        }
        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

fn spawn_session_sweeper(state: &AppState) -> Option<JoinHandle<()>> {
    let ttl = state.config.session.ttl_secs;
    if ttl == 0 {
        return None;
    }
    let sessions = state.sessions.clone();
    let period = Duration::from_secs(ttl.min(60));
    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let removed = sessions.purge_expired();
            if removed > 0 {
                tracing::debug!(removed, "Expired idle sessions");
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn server(dir: &tempfile::TempDir) -> HttpServer {
        let mut config = HelpdeskConfig::default();
        config.storage.data_dir = dir.path().to_string_lossy().into_owned();
        HttpServer::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_index_requires_session() {
        let dir = tempfile::tempdir().unwrap();
        let res = server(&dir)
            .router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/login");
        assert_eq!(res.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert!(res.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_login_sets_session_cookie() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(&dir);
        let body = r#"{"email": "admin@example.com", "password": "Admin@123"}"#;

        let res = server
            .router()
            .oneshot(Request::post("/login").body(Body::from(body)).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let cookie = res.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("hr_session="));
        assert_eq!(server.state().sessions.len(), 1);
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = HelpdeskConfig::default();
        config.storage.data_dir = dir.path().to_string_lossy().into_owned();
        config.security.max_body_size = 16;
        let server = HttpServer::new(config).unwrap();

        let res = server
            .router()
            .oneshot(
                Request::post("/login")
                    .body(Body::from(vec![b' '; 1024]))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
