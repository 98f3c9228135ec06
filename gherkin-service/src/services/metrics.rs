//! Prometheus metrics for gherkin-service.
//!
//! Recording goes through the `metrics` facade, so calls are no-ops until
//! `init_metrics` installs the exporter.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Install the global Prometheus recorder. Call once at startup.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

pub fn record_generation(backend: &'static str, success: bool, elapsed: Duration) {
    let outcome = if success { "success" } else { "failure" };

    counter!("gherkin_generations_total", "backend" => backend, "outcome" => outcome)
        .increment(1);
    histogram!("gherkin_generation_duration_seconds", "backend" => backend)
        .record(elapsed.as_secs_f64());
}
