//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{Settings, DEFAULT_PORT};
use crate::config::validation::{validate_settings, ValidationError};

pub const PORT_ENV: &str = "PORT";
pub const ROOT_ENV: &str = "STUDY_BUDDY_ROOT";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),

    #[error("invalid LOG_FORMAT value: {0}")]
    InvalidLogFormat(String),

    #[error("validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve the listening port from the raw `PORT` value.
///
/// Unset means [`DEFAULT_PORT`]. Surrounding whitespace is ignored; anything
/// else that is not a decimal `u16` is rejected.
pub fn resolve_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_string())),
    }
}

impl Settings {
    /// Load settings from the process environment and an optional file.
    pub fn load(path: Option<&Path>) -> Result<Settings, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Load settings using `lookup` in place of the process environment.
    ///
    /// Precedence: defaults, then the TOML file, then environment values.
    /// The listen host comes only from the file; an inherited `HOST` (set by
    /// many shells) is ignored.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match path {
            Some(path) => read_file(path)?,
            None => Settings::default(),
        };

        if let Some(raw) = lookup(PORT_ENV) {
            settings.server.port = resolve_port(Some(raw.as_str()))?;
        }
        if let Some(root) = lookup(ROOT_ENV) {
            settings.paths.project_root = Some(PathBuf::from(root));
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            settings.logging.format = format.parse().map_err(ConfigError::InvalidLogFormat)?;
        }

        validate_settings(&settings).map_err(ConfigError::Validation)?;

        Ok(settings)
    }
}

fn read_file(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
