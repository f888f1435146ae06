//! Telemetry opt-out against an inherited environment.
//!
//! Runs in its own test binary so mutating the variable cannot race the
//! library's unit tests.

use study_buddy::telemetry::{self, TELEMETRY_ENV, TELEMETRY_OFF};

#[test]
fn test_disable_overwrites_inherited_value() {
    std::env::set_var(TELEMETRY_ENV, "True");
    assert!(!telemetry::is_disabled());

    let _token = telemetry::disable();

    assert_eq!(std::env::var(TELEMETRY_ENV).unwrap(), TELEMETRY_OFF);
    assert!(telemetry::is_disabled());
}
