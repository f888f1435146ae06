//! HTTP server setup.
//!
//! # Responsibilities
//! - Wrap the application router in the middleware stack
//!   (request id, request timeout, tracing)
//! - Bind the listener on the configured address
//! - Serve until shutdown, then drain within the grace period

use std::future::IntoFuture;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{ServerConfig, Settings};
use crate::http::request::make_request_span;

/// Bind a listener on `host:port` from the settings.
pub async fn bind(config: &ServerConfig) -> std::io::Result<TcpListener> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");
    Ok(listener)
}

/// HTTP server for the application router.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    pub fn new(settings: &Settings, app: Router) -> Self {
        let config = settings.server.clone();
        let router = Self::build_router(&config, app);
        Self { router, config }
    }

    /// Layer the middleware stack over `app`. The request id is assigned
    /// outermost so the trace span and the response both see it.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, app: Router) -> Router {
        app.layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Serve on `listener` until `shutdown` fires.
    ///
    /// In-flight requests get `shutdown_grace_secs` to finish; after that this
    /// returns without waiting for them. Connections still open at that point
    /// live until the runtime is dropped (in the binary, right after `run`).
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> std::io::Result<()> {
        let addr = listener.local_addr()?;
        let grace = Duration::from_secs(self.config.shutdown_grace_secs);
        let mut drain = shutdown.resubscribe();

        tracing::info!(address = %addr, "HTTP server starting");

        let serve = axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .into_future();

        tokio::select! {
            result = serve => result?,
            _ = async {
                let _ = drain.recv().await;
                tokio::time::sleep(grace).await;
            } => {
                tracing::warn!(
                    grace_secs = grace.as_secs(),
                    "Drain deadline passed, no longer waiting for open connections"
                );
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
