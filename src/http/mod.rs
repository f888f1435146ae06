//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request id, tracing span)
//!     → backend::app router
//!     → response (x-request-id copied back)
//! ```

pub mod request;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{bind, HttpServer};
