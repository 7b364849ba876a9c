//! Prometheus metrics endpoint

use axum::extract::State;
use metrics_exporter_prometheus::PrometheusHandle;

/// Render current metrics in Prometheus text format.
pub async fn render_metrics(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}
