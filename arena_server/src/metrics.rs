//! Prometheus metrics for monitoring server health and traffic.
//!
//! Metrics are exposed in Prometheus text format for scraping by
//! monitoring systems, on a separate listener configured via
//! `METRICS_BIND`.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Sets up a Prometheus scrape endpoint on the specified address.
/// Metrics will be available at `http://<addr>/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

/// Record HTTP request with method, path, and status labels.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record HTTP request duration in milliseconds.
pub fn http_request_duration_ms(method: &str, path: &str, duration_ms: f64) {
    metrics::histogram!("http_request_duration_ms",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_ms);
}

/// Increment registrations counter; `created` distinguishes first-time
/// registrations from repeat calls that returned the existing record.
pub fn registrations_total(created: bool) {
    metrics::counter!("registrations_total",
        "created" => created.to_string()
    )
    .increment(1);
}

/// Increment withdrawal requests counter.
pub fn withdrawal_requests_total() {
    metrics::counter!("withdrawal_requests_total").increment(1);
}

/// Record withdrawal amount distribution.
pub fn withdrawal_amount(amount: i64) {
    metrics::histogram!("withdrawal_amount").record(amount as f64);
}

/// Increment friend requests counter.
pub fn friend_requests_total() {
    metrics::counter!("friend_requests_total").increment(1);
}

/// Increment avatar uploads counter.
pub fn avatar_uploads_total() {
    metrics::counter!("avatar_uploads_total").increment(1);
}

/// Increment rate limit hits counter.
pub fn rate_limit_hits_total(endpoint: &str) {
    metrics::counter!("rate_limit_hits_total",
        "endpoint" => endpoint.to_string()
    )
    .increment(1);
}
