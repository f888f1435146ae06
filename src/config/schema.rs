//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from an optional
//! TOML file. Every field has a default so an empty file is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Port used when neither the environment nor a config file names one.
pub const DEFAULT_PORT: u16 = 8000;

/// Address the listener binds when no host is configured (all interfaces).
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Root configuration for the launcher.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Listener and request handling.
    pub server: ServerConfig,

    /// Filesystem locations used to find runtime assets.
    pub paths: PathsConfig,

    /// Log output settings.
    pub logging: LoggingConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind, `0.0.0.0` for all.
    pub host: String,

    /// TCP port to listen on.
    pub port: u16,

    /// Total time allowed for a single request in seconds.
    pub request_timeout_secs: u64,

    /// How long in-flight requests may drain after a shutdown signal.
    pub shutdown_grace_secs: u64,
}

impl ServerConfig {
    /// `host:port` string handed to the listener.
    pub fn bind_address(&self) -> String {
        match self.host.parse::<std::net::IpAddr>() {
            Ok(ip) => std::net::SocketAddr::new(ip, self.port).to_string(),
            Err(_) => format!("{}:{}", self.host, self.port),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout_secs: 30,
            shutdown_grace_secs: 10,
        }
    }
}

/// Search path configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Project root; the working directory when unset.
    pub project_root: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,

    /// `EnvFilter` directives used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            filter: "study_buddy=info,tower_http=info".to_string(),
        }
    }
}
