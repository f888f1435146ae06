//! Smart Study Buddy server.
//!
//! ```text
//! ANONYMIZED_TELEMETRY=False   (before anything else, single-threaded)
//!     → load settings (--config file, PORT/STUDY_BUDDY_ROOT/LOG_FORMAT env)
//!     → init logging
//!     → search path: <root>/backend, <root>
//!     → backend::app
//!     → bind 0.0.0.0:$PORT (default 8000), serve until SIGINT/SIGTERM
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use study_buddy::config::Settings;
use study_buddy::lifecycle::{self, signals, Shutdown};
use study_buddy::observability::logging;
use study_buddy::telemetry;

#[derive(Parser)]
#[command(name = "study-buddy")]
#[command(about = "Serve the Smart Study Buddy backend", long_about = None)]
struct Cli {
    /// Optional TOML settings file; environment variables override it.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Must run before the runtime spawns worker threads.
    let telemetry = telemetry::disable();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;

    logging::init(&settings.logging);
    tracing::info!(
        var = telemetry::TELEMETRY_ENV,
        value = telemetry::TELEMETRY_OFF,
        "Third-party telemetry disabled"
    );

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "study-buddy starting");
    tracing::info!(
        bind_address = %settings.server.bind_address(),
        request_timeout_secs = settings.server.request_timeout_secs,
        "Configuration loaded"
    );

    let launch = lifecycle::prepare(&telemetry, settings)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(async move {
        let shutdown = Shutdown::new();
        let server_shutdown = shutdown.subscribe();
        signals::forward_to(shutdown);
        launch.serve(server_shutdown).await
    })?;

    tracing::info!("Shutdown complete");
    Ok(())
}
