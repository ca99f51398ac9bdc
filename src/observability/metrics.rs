//! Metrics collection and exposition.
//!
//! # Metrics
//! - `bead_resolutions_total` (counter): resolutions by outcome
//! - `bead_resolve_duration_seconds` (histogram): end-to-end resolve latency by outcome
//! - `ledger_calls_total` (counter): contract reads by function signature and result
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one finished resolution.
pub fn record_resolution(outcome: &'static str, started: Instant) {
    metrics::counter!("bead_resolutions_total", "outcome" => outcome).increment(1);
    metrics::histogram!("bead_resolve_duration_seconds", "outcome" => outcome)
        .record(started.elapsed().as_secs_f64());
}

/// Record one contract read.
pub fn record_ledger_call(function: &'static str, success: bool) {
    let result = if success { "ok" } else { "error" };
    metrics::counter!("ledger_calls_total", "function" => function, "result" => result).increment(1);
}
