//! Download integration tests.
//!
//! Tests verify:
//! - Stored bytes are returned with an octet-stream content type
//! - Missing and unreadable entries are 404 with an empty body
//! - Encoded traversal attempts are rejected

use axum::http::StatusCode;
use tower::ServiceExt;

use super::test_utils::{body_bytes, get_request, TestServer};

#[tokio::test]
async fn test_download_existing_file() {
    let server = TestServer::new();
    std::fs::write(server.root().join("report.txt"), b"hello").unwrap();

    let response = server
        .router
        .clone()
        .oneshot(get_request("/files/report.txt"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/octet-stream"
    );
    assert_eq!(body_bytes(response).await, b"hello");
}

#[tokio::test]
async fn test_download_missing_file() {
    let server = TestServer::new();

    let response = server
        .router
        .clone()
        .oneshot(get_request("/files/nonexistent.txt"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_download_directory_is_not_found() {
    let server = TestServer::new();
    std::fs::create_dir(server.root().join("subdir")).unwrap();

    let response = server
        .router
        .clone()
        .oneshot(get_request("/files/subdir"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_download_encoded_traversal_rejected() {
    let server = TestServer::new();
    std::fs::write(server.outside().join("secret.txt"), b"do not serve").unwrap();

    let response = server
        .router
        .clone()
        .oneshot(get_request("/files/..%2Fsecret.txt"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_download_parent_segment_rejected() {
    let server = TestServer::new();

    let response = server
        .router
        .clone()
        .oneshot(get_request("/files/.."))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_download_encoded_name() {
    let server = TestServer::new();
    std::fs::write(server.root().join("my report.txt"), b"spaced").unwrap();

    let response = server
        .router
        .clone()
        .oneshot(get_request("/files/my%20report.txt"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"spaced");
}
