//! The application object served by the launcher.
//!
//! # Routes
//! - `GET /health`: liveness probe
//! - `GET /api/info`: name, version and telemetry state
//! - unknown `/api/*` paths: JSON 404, always
//! - anything else: the built frontend (`frontend/dist`, SPA fallback to
//!   `index.html`) when one is found on the search path, otherwise a JSON 404

pub mod handlers;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::paths::SearchPath;
use crate::telemetry::TelemetryDisabled;
use self::handlers::*;

/// Location of the built frontend, relative to a search path entry.
pub const FRONTEND_DIST: &str = "frontend/dist";

/// Build the application router.
///
/// Takes a [`TelemetryDisabled`] token so the telemetry flag is always set
/// before anything in the backend is constructed.
pub fn app(_telemetry: &TelemetryDisabled, search_path: &SearchPath) -> Router {
    let api = Router::new()
        .route("/health", get(get_health))
        .nest(
            "/api",
            Router::new().route("/info", get(get_info)).fallback(not_found),
        );

    match search_path.resolve(FRONTEND_DIST) {
        Some(dist) => {
            tracing::info!(path = %dist.display(), "Serving frontend");
            let index = ServeFile::new(dist.join("index.html"));
            api.fallback_service(ServeDir::new(dist).fallback(index))
        }
        None => {
            tracing::info!("No built frontend on search path, API only");
            api.fallback(not_found)
        }
    }
}
