//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use paylink_types::PaymentLinkRepository;

use super::handlers::{self, AppState};
use crate::PaymentLinkService;

/// HTTP Server for the payment link API.
pub struct HttpServer<R: PaymentLinkRepository> {
    state: Arc<AppState<R>>,
}

impl<R: PaymentLinkRepository> HttpServer<R> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: PaymentLinkService<R>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route(
                "/api/payment-links",
                post(handlers::create_payment_link::<R>),
            )
            .route(
                "/api/payment-links/{id}",
                get(handlers::get_payment_link::<R>),
            )
            .route(
                "/api/payment-links/{id}",
                patch(handlers::update_payment_link::<R>),
            )
            .route(
                "/api/payment-links/{id}",
                delete(handlers::delete_payment_link::<R>),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
