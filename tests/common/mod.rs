//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use study_buddy::lifecycle::{self, Shutdown, StartupError};
use study_buddy::{telemetry, Settings};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[allow(dead_code)]
/// A launched server bound to an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), StartupError>>,
}

#[allow(dead_code)]
/// Prepare and serve the app rooted at `root` on `127.0.0.1:0`.
pub async fn start_server(root: &Path) -> TestServer {
    let mut settings = Settings::default();
    settings.server.host = "127.0.0.1".into();
    settings.server.shutdown_grace_secs = 1;
    settings.paths.project_root = Some(root.to_path_buf());

    let launch = lifecycle::prepare(&telemetry::disable(), settings).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { launch.serve_on(listener, server_shutdown).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// A loopback port that was free a moment ago.
#[allow(dead_code)]
pub fn free_port() -> u16 {
    let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    probe.local_addr().unwrap().port()
}

/// Poll `url` until it answers or `timeout` passes.
#[allow(dead_code)]
pub async fn wait_until_up(url: &str, timeout: Duration) -> bool {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if client.get(url).send().await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    false
}

#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
