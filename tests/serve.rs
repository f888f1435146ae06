//! End-to-end tests against a served router.

use std::fs;
use std::time::Duration;

use axum::http::StatusCode;

mod common;

#[tokio::test]
async fn test_health_and_request_id() {
    let root = tempfile::tempdir().unwrap();
    let server = common::start_server(root.path()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/health", server.addr))
        .send()
        .await
        .expect("Server unreachable");
    assert_eq!(res.status(), StatusCode::OK);

    let request_id = res
        .headers()
        .get("x-request-id")
        .expect("Response should carry a request id")
        .to_str()
        .unwrap()
        .to_string();
    assert!(uuid::Uuid::parse_str(&request_id).is_ok(), "{request_id} is not a UUID");

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    server.shutdown.trigger();
    server.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_client_request_id_is_kept() {
    let root = tempfile::tempdir().unwrap();
    let server = common::start_server(root.path()).await;

    let res = common::client()
        .get(format!("http://{}/api/info", server.addr))
        .header("x-request-id", "trace-me-42")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-request-id"], "trace-me-42");

    let info: serde_json::Value = res.json().await.unwrap();
    assert_eq!(info["telemetry"], "disabled");

    server.shutdown.trigger();
    server.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_frontend_found_through_backend_dir() {
    let root = tempfile::tempdir().unwrap();
    let dist = root.path().join("backend/frontend/dist");
    fs::create_dir_all(&dist).unwrap();
    fs::write(dist.join("index.html"), "<div id=\"root\"></div>").unwrap();

    let server = common::start_server(root.path()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/qa", server.addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "<div id=\"root\"></div>");

    server.shutdown.trigger();
    server.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_unknown_route_detail() {
    let root = tempfile::tempdir().unwrap();
    let server = common::start_server(root.path()).await;

    let res = common::client()
        .post(format!("http://{}/api/summarize", server.addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["detail"], "Not Found");

    server.shutdown.trigger();
    server.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_shutdown_stops_accepting() {
    let root = tempfile::tempdir().unwrap();
    let server = common::start_server(root.path()).await;
    let addr = server.addr;

    server.shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("Server should stop after shutdown")
        .unwrap()
        .unwrap();

    let res = common::client()
        .get(format!("http://{}/health", addr))
        .timeout(Duration::from_secs(1))
        .send()
        .await;
    assert!(res.is_err(), "Listener should be closed after shutdown");
}
