//! End-to-end upload tests against a local mock of the detection backend.

use axum::{
    extract::Multipart,
    http::{header::ACCEPT, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use detect_cli::{detect_file, run_upload, CliError};
use detect_common::BackendConfig;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Serve `router` on an ephemeral port and return its origin.
async fn spawn_backend(router: Router) -> BackendConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    BackendConfig::new(format!("http://{}", addr))
}

/// Annotates nothing: sends the uploaded bytes straight back as the image.
async fn echo_upload(headers: HeaderMap, mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    if headers.get(ACCEPT).and_then(|v| v.to_str().ok()) != Some("application/json") {
        return (StatusCode::NOT_ACCEPTABLE, Json(json!({ "error": "bad accept header" })));
    }

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.unwrap();

            let expected_name = file_name.as_deref() == Some("street.jpg");
            let expected_type = content_type.as_deref() == Some("image/jpeg");
            if !expected_name || !expected_type {
                let body = json!({ "error": "unexpected part metadata" });
                return (StatusCode::BAD_REQUEST, Json(body));
            }
            return (StatusCode::OK, Json(json!({ "image": STANDARD.encode(&bytes) })));
        }
    }

    (StatusCode::BAD_REQUEST, Json(json!({ "error": "No file provided" })))
}

fn write_image(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("street.jpg");
    std::fs::write(&path, b"\xff\xd8\xff\xe0fake-jpeg").unwrap();
    path
}

fn upload_error(err: CliError) -> String {
    match err {
        CliError::Upload(message) => message,
        other => panic!("expected upload error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_round_trip_writes_annotated_image() {
    let config = spawn_backend(Router::new().route("/upload", post(echo_upload))).await;
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(&dir);

    let saved = run_upload(&config, &input, None).await.unwrap();

    assert_eq!(saved, dir.path().join("street.detected.jpg"));
    assert_eq!(std::fs::read(&saved).unwrap(), std::fs::read(&input).unwrap());
}

#[tokio::test]
async fn test_explicit_output_path() {
    let config = spawn_backend(Router::new().route("/upload", post(echo_upload))).await;
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(&dir);
    let output = dir.path().join("boxes.jpg");

    let saved = run_upload(&config, &input, Some(&output)).await.unwrap();
    assert_eq!(saved, output);
    assert!(output.exists());
}

#[tokio::test]
async fn test_image_becomes_data_uri() {
    let router = Router::new().route(
        "/upload",
        post(|| async { Json(json!({ "image": "Zm9v" })) }),
    );
    let config = spawn_backend(router).await;
    let dir = tempfile::tempdir().unwrap();

    let state = detect_file(&config, &write_image(&dir)).await.unwrap();

    assert_eq!(state.result(), Some("data:image/jpeg;base64,Zm9v"));
    assert_eq!(state.error(), None);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_backend_error_payload() {
    let router = Router::new().route(
        "/upload",
        post(|| async { Json(json!({ "error": "no objects found" })) }),
    );
    let config = spawn_backend(router).await;
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(&dir);

    let state = detect_file(&config, &input).await.unwrap();
    assert_eq!(state.error(), Some("Error uploading image: no objects found"));
    assert_eq!(state.result(), None);

    let err = run_upload(&config, &input, None).await.unwrap_err();
    assert_eq!(upload_error(err), "Error uploading image: no objects found");
    assert!(!dir.path().join("street.detected.jpg").exists());
}

#[tokio::test]
async fn test_server_error_status() {
    let router = Router::new().route(
        "/upload",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let config = spawn_backend(router).await;
    let dir = tempfile::tempdir().unwrap();

    let state = detect_file(&config, &write_image(&dir)).await.unwrap();

    let error = state.error().unwrap();
    assert!(error.contains("500"), "{}", error);
    assert_eq!(state.result(), None);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_missing_route_reports_status() {
    let config = spawn_backend(Router::new()).await;
    let dir = tempfile::tempdir().unwrap();

    let state = detect_file(&config, &write_image(&dir)).await.unwrap();
    assert_eq!(state.error(), Some("Error uploading image: HTTP error! status: 404"));
}

#[tokio::test]
async fn test_malformed_json() {
    let router = Router::new().route("/upload", post(|| async { "<html>not json</html>" }));
    let config = spawn_backend(router).await;
    let dir = tempfile::tempdir().unwrap();

    let state = detect_file(&config, &write_image(&dir)).await.unwrap();

    assert!(state.error().unwrap().starts_with("Error uploading image: "));
    assert_eq!(state.result(), None);
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind then release a port so nothing is listening on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = BackendConfig::new(format!("http://{}", addr));
    let dir = tempfile::tempdir().unwrap();

    let state = detect_file(&config, &write_image(&dir)).await.unwrap();

    let error = state.error().unwrap();
    assert!(error.starts_with("Error uploading image: "), "{}", error);
    assert!(error.contains("error sending request"), "{}", error);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_missing_input_never_uploads() {
    let config = BackendConfig::new("http://127.0.0.1:9");
    let err = run_upload(&config, Path::new("/definitely/not/here.jpg"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::Io(_)));
}
