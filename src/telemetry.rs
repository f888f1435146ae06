//! Third-party telemetry opt-out.
//!
//! The embedded vector store client reads `ANONYMIZED_TELEMETRY` when it is
//! first initialized, so the flag has to be in the environment before the
//! backend is built. [`disable`] is the only way to obtain a
//! [`TelemetryDisabled`] token, and [`crate::backend::app`] requires one.

/// Environment variable read by the telemetry-reporting client.
pub const TELEMETRY_ENV: &str = "ANONYMIZED_TELEMETRY";

/// Value that turns reporting off.
pub const TELEMETRY_OFF: &str = "False";

/// Proof that [`disable`] has run in this process.
#[derive(Debug, Clone, Copy)]
pub struct TelemetryDisabled {
    _private: (),
}

/// Force the telemetry flag off, overwriting any inherited value.
///
/// Call this before spawning threads; `main` does so ahead of building the
/// Tokio runtime.
pub fn disable() -> TelemetryDisabled {
    std::env::set_var(TELEMETRY_ENV, TELEMETRY_OFF);
    TelemetryDisabled { _private: () }
}

/// Whether the flag currently reads as disabled.
pub fn is_disabled() -> bool {
    std::env::var(TELEMETRY_ENV).map_or(false, |v| v == TELEMETRY_OFF)
}
