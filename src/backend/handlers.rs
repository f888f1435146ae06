use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::telemetry;

pub const APP_NAME: &str = "Smart Study Buddy";

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub telemetry: &'static str,
}

/// Error body in the `{"detail": ...}` shape the frontend reads.
#[derive(Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

pub async fn get_info() -> Json<AppInfo> {
    Json(AppInfo {
        name: APP_NAME,
        version: env!("CARGO_PKG_VERSION"),
        telemetry: if telemetry::is_disabled() {
            "disabled"
        } else {
            "enabled"
        },
    })
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDetail {
            detail: "Not Found".to_string(),
        }),
    )
}
