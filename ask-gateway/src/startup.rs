//! Application startup and lifecycle management.

use crate::config::GatewayConfig;
use crate::handlers;
use crate::services::metrics::init_metrics;
use crate::services::providers::openai::OpenAiProvider;
use crate::services::providers::CompletionProvider;
use crate::services::CompletionGateway;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use gateway_core::error::AppError;
use gateway_core::middleware::{http_trace_layer, permissive_cors, request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: GatewayConfig,
    pub gateway: CompletionGateway,
}

impl AppState {
    pub fn new(config: GatewayConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        let gateway = CompletionGateway::new(provider, config.openai.model.clone());
        Self { config, gateway }
    }
}

/// Build the HTTP router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(handlers::ask::ask))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/metrics", get(handlers::health::metrics_endpoint))
        .fallback(handlers::health::not_found)
        .with_state(state)
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .layer(permissive_cors())
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application backed by the OpenAI provider.
    pub async fn build(config: GatewayConfig) -> Result<Self, AppError> {
        let provider = OpenAiProvider::new(config.openai.clone()).map_err(|e| {
            tracing::error!("Failed to create HTTP client: {}", e);
            AppError::InternalError(e.into())
        })?;

        if provider.is_configured() {
            tracing::info!(model = %config.openai.model, "Initialized OpenAI provider");
        } else {
            tracing::warn!("OPENAI_API_KEY not set - every answer will be an error until it is");
        }

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application around an arbitrary provider.
    pub async fn build_with_provider(
        config: GatewayConfig,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self, AppError> {
        init_metrics().map_err(|e| {
            tracing::error!("Failed to initialize metrics: {}", e);
            AppError::InternalError(e.into())
        })?;

        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let router = build_router(AppState::new(config, provider));

        tracing::info!("Ask gateway: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT/SIGTERM, then drain in-flight requests.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
