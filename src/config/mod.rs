//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs)
//!     → environment overrides: PORT, STUDY_BUDDY_ROOT, LOG_FORMAT
//!     → validation.rs (semantic checks)
//!     → Settings (validated, immutable)
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{resolve_port, ConfigError, PORT_ENV};
pub use schema::{LogFormat, LoggingConfig, PathsConfig, ServerConfig, Settings};
pub use validation::ValidationError;
