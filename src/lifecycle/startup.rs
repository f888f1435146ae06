//! Startup orchestration.
//!
//! [`prepare`] performs everything up to and including building the
//! application object. It never opens a socket; only [`Launch::serve`]
//! does, and only the binary calls it.

use std::path::PathBuf;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::backend;
use crate::config::Settings;
use crate::http::{self, HttpServer};
use crate::paths::{self, SearchPath};
use crate::telemetry::TelemetryDisabled;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to resolve project root: {0}")]
    ProjectRoot(#[source] std::io::Error),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// A fully prepared, not yet listening, server.
pub struct Launch {
    settings: Settings,
    project_root: PathBuf,
    search_path: SearchPath,
    app: Router,
}

/// Resolve the search path and build the application object.
pub fn prepare(telemetry: &TelemetryDisabled, settings: Settings) -> Result<Launch, StartupError> {
    let project_root = paths::project_root(settings.paths.project_root.as_deref())
        .map_err(StartupError::ProjectRoot)?;
    let search_path = SearchPath::for_root(&project_root);

    tracing::debug!(
        project_root = %project_root.display(),
        search_path = ?search_path.entries(),
        "Search path resolved"
    );

    let app = backend::app(telemetry, &search_path);

    Ok(Launch {
        settings,
        project_root,
        search_path,
        app,
    })
}

impl Launch {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn project_root(&self) -> &PathBuf {
        &self.project_root
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    /// Bind the configured address and serve until `shutdown` fires.
    pub async fn serve(self, shutdown: broadcast::Receiver<()>) -> Result<(), StartupError> {
        let listener = http::bind(&self.settings.server)
            .await
            .map_err(|source| StartupError::Bind {
                address: self.settings.server.bind_address(),
                source,
            })?;
        self.serve_on(listener, shutdown).await
    }

    /// Serve on an already bound listener.
    pub async fn serve_on(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), StartupError> {
        let server = HttpServer::new(&self.settings, self.app);
        server
            .run(listener, shutdown)
            .await
            .map_err(StartupError::Serve)
    }
}
