//! Application startup and lifecycle management.

use axum::{middleware::from_fn, routing::get, routing::post, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use service_core::middleware::{
    metrics_middleware, not_found_fallback, panic_response, request_id_middleware,
    security_headers_middleware, status_taxonomy_middleware, RequestId,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::config::GherkinConfig;
use crate::handlers;
use crate::services::{GenerationService, GherkinGenerator};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GherkinConfig>,
    pub generation: GenerationService,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: GherkinConfig, generator: Arc<dyn GherkinGenerator>) -> Self {
        let generation = GenerationService::new(generator, config.generation.timeout());
        Self {
            config: Arc::new(config),
            generation,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/v1/generate-gherkin", post(handlers::generate_gherkin))
        .route("/v1/health", get(handlers::health_check))
        .route("/:version/model", get(handlers::model_metadata));

    if let Some(handle) = state.metrics.clone() {
        router = router.merge(
            Router::new()
                .route("/metrics", get(handlers::metrics::metrics))
                .with_state(handle),
        );
    }

    router
        .fallback(not_found_fallback)
        .with_state(state)
        // Panics inside handlers become the generic 500 body
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(from_fn(status_taxonomy_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .extensions()
                    .get::<RequestId>()
                    .map(RequestId::as_str)
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Bind the listener (port 0 picks a random port) and assemble the router.
    pub async fn build(state: AppState) -> std::io::Result<Self> {
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            e
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            service = %state.config.service_name,
            backend = state.generation.backend_name(),
            port,
            "Gherkin service listening"
        );

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until the future completes, then drain in-flight requests.
    pub async fn run_until<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_until(std::future::pending::<()>()).await
    }
}
