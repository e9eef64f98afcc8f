//! Metrics collection and exposition.
//!
//! # Metrics
//! - `helpdesk_http_requests_total` (counter): requests by method, status
//! - `helpdesk_http_request_duration_seconds` (histogram): latency distribution
//! - `helpdesk_intents_total` (counter): assistant messages by detected intent
//! - `helpdesk_auth_events_total` (counter): login/register/logout by outcome
//! - `helpdesk_active_sessions` (gauge): live sessions

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exporter on `addr`. Must run inside the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    let method = method.to_string();
    let status = status.to_string();
    metrics::counter!(
        "helpdesk_http_requests_total",
        "method" => method.clone(),
        "status" => status.clone()
    )
    .increment(1);
    metrics::histogram!(
        "helpdesk_http_request_duration_seconds",
        "method" => method,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_intent(intent: &'static str) {
    metrics::counter!("helpdesk_intents_total", "intent" => intent).increment(1);
}

pub fn record_auth_event(event: &'static str, outcome: &'static str) {
    metrics::counter!("helpdesk_auth_events_total", "event" => event, "outcome" => outcome)
        .increment(1);
}

pub fn record_active_sessions(count: usize) {
    metrics::gauge!("helpdesk_active_sessions").set(count as f64);
}

/// Middleware recording one request sample per response.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let response = next.run(request).await;
    record_request(method.as_str(), response.status().as_u16(), start);
    response
}
