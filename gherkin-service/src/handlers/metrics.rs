use axum::extract::State;
use metrics_exporter_prometheus::PrometheusHandle;

pub async fn metrics(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}
