//! Smart Study Buddy server library.
//!
//! Using the library never starts a server: [`lifecycle::prepare`] builds
//! the application object, and only [`lifecycle::Launch::serve`] binds.

pub mod backend;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod paths;
pub mod telemetry;

pub use config::Settings;
pub use http::HttpServer;
pub use lifecycle::{Launch, Shutdown};
