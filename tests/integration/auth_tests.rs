//! Authentication integration tests.
//!
//! Tests verify:
//! - The exact shared secret is accepted
//! - Wrong, differently-cased and missing credentials get 401
//! - Rejected uploads never touch the storage root
//! - Downloads do not require a credential

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::test_utils::{
    body_bytes, body_string, get_request, multipart_body, upload_request, Part, TestServer,
    TEST_SECRET,
};

#[tokio::test]
async fn test_valid_credential_succeeds() {
    let server = TestServer::new();

    let response = server
        .router
        .clone()
        .oneshot(upload_request(
            Some(TEST_SECRET),
            &[Part::file("a.txt", b"data")],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_wrong_credential_rejected() {
    let server = TestServer::new();

    let response = server
        .router
        .clone()
        .oneshot(upload_request(Some("wrong"), &[Part::file("a.txt", b"data")]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(response).await, "Unauthorized");
    assert!(!server.root().join("a.txt").exists());
}

#[tokio::test]
async fn test_credential_is_case_sensitive() {
    let server = TestServer::new();

    let response = server
        .router
        .clone()
        .oneshot(upload_request(
            Some(TEST_SECRET.to_uppercase().as_str()),
            &[Part::file("a.txt", b"data")],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_credential_rejected() {
    let server = TestServer::new();

    let response = server
        .router
        .clone()
        .oneshot(upload_request(None, &[Part::file("a.txt", b"data")]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(response).await, "Unauthorized");
}

#[tokio::test]
async fn test_empty_credential_rejected() {
    let server = TestServer::new();

    let response = server
        .router
        .clone()
        .oneshot(upload_request(Some(""), &[Part::file("a.txt", b"data")]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unauthorized_wins_over_missing_file_part() {
    let server = TestServer::new();

    let response = server
        .router
        .clone()
        .oneshot(upload_request(Some("wrong"), &[Part::text("note", "hi")]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_lowercase_header_name_accepted() {
    let server = TestServer::new();

    let request = Request::builder()
        .method("POST")
        .uri("/files")
        .header(
            "content-type",
            "multipart/form-data; boundary=file-service-test-boundary",
        )
        .header("celonis-auth", TEST_SECRET)
        .body(Body::from(multipart_body(&[Part::file("a.txt", b"data")])))
        .unwrap();

    let response = server.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_download_needs_no_credential() {
    let server = TestServer::new();
    std::fs::write(server.root().join("public.txt"), b"open").unwrap();

    let response = server
        .router
        .clone()
        .oneshot(get_request("/files/public.txt"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"open");
}

#[tokio::test]
async fn test_wrong_credential_with_plain_text_body_rejected() {
    let server = TestServer::new();

    let request = Request::builder()
        .method("POST")
        .uri("/files")
        .header("content-type", "text/plain")
        .header("Celonis-Auth", "wrong")
        .body(Body::from("hello"))
        .unwrap();

    let response = server.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(response).await, "Unauthorized");
}

#[tokio::test]
async fn test_missing_credential_without_content_type_rejected() {
    let server = TestServer::new();

    let request = Request::builder()
        .method("POST")
        .uri("/files")
        .body(Body::from("hello"))
        .unwrap();

    let response = server.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(response).await, "Unauthorized");
}
