//! Metrics collection and exposition.
//!
//! # Metrics
//! - `inspector_requests_total` (counter): requests by method, page, status
//! - `inspector_request_duration_seconds` (histogram): latency by method, page, status
//!
//! # Design Decisions
//! - Labels use the matched route pattern, never the raw path, to keep
//!   cardinality bounded
//! - Exposition runs on its own listener so the pages and the scrape
//!   endpoint never share a port

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its exposition listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(
                address = %addr,
                "Prometheus exporter listening"
            );
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                "Failed to install Prometheus exporter"
            );
        }
    }
}

/// Axum middleware recording one counter increment and one latency
/// observation per request.
///
/// Applied as a route layer so the matched path is already in the
/// request extensions.
pub async fn track_request(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let page = match request.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_string(),
        None => request.uri().path().to_string(),
    };

    let response = next.run(request).await;

    record_request(&method, response.status().as_u16(), &page, start);
    response
}

/// Record a completed request.
pub fn record_request(method: &str, status: u16, page: &str, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("page", page.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("inspector_requests_total", &labels).increment(1);
    metrics::histogram!("inspector_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}
