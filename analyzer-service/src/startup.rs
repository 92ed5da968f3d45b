//! Application startup and lifecycle management.

use crate::config::Settings;
use crate::handlers::{
    analyze::analyze,
    app::{health_check, index},
    metrics::metrics,
};
use crate::middleware::metrics::metrics_middleware;
use crate::middleware::request_id::{request_id_middleware, REQUEST_ID_HEADER};
use crate::services::providers::anthropic::{AnthropicConfig, AnthropicProvider};
use crate::services::providers::AnalysisProvider;
use crate::AppState;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/api/analyze", post(analyze))
        .nest_service("/static", ServeDir::new("analyzer-service/static"))
        .layer(from_fn(metrics_middleware))
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
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
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// A missing API key is allowed here; the provider reports it on each
    /// request instead of failing startup.
    pub async fn build(settings: Settings) -> Result<Self, anyhow::Error> {
        let provider: Arc<dyn AnalysisProvider> =
            Arc::new(AnthropicProvider::new(AnthropicConfig {
                api_key: settings.anthropic.api_key.clone(),
                model: settings.anthropic.model.clone(),
                max_tokens: settings.anthropic.max_tokens,
            }));

        tracing::info!(
            model = %settings.anthropic.model,
            "Initialized Anthropic analysis provider"
        );

        let state = AppState::new(provider);
        let router = build_router(state);

        let address = format!("{}:{}", settings.server.host, settings.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on (useful with port 0).
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!("Starting analyzer-service on port {}", self.port);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
