//! Observability subsystem.
//!
//! Structured logs via `tracing`; each request runs inside a span that
//! carries its `x-request-id` (see `http::request`).

pub mod logging;
