//! In-process HTTP fixtures for relay and router tests.

use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Response, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral local port; returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// URL of a local port nothing listens on.
pub async fn unused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/info")
}

/// Stand-in for the info API.
///
/// - `/info`: 200 `{"ok":true}` as JSON
/// - `/echo`: echoes a JSON request body, 415 for other content-types
/// - `/fail`: 500 with no body and no content-type
/// - `/text`: 404 plain text
/// - `/slow`: answers after two seconds
pub fn fake_upstream() -> Router {
    Router::new()
        .route("/info", post(ok))
        .route("/echo", post(echo))
        .route("/fail", post(fail))
        .route("/text", post(text))
        .route("/slow", post(slow))
}

async fn ok() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], r#"{"ok":true}"#)
}

async fn echo(headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if !is_json {
        return StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response();
    }
    ([(CONTENT_TYPE, "application/json")], body).into_response()
}

async fn fail() -> Response<Body> {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .body(Body::empty())
        .unwrap()
}

async fn text() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "no such route")
}

async fn slow() -> impl IntoResponse {
    tokio::time::sleep(Duration::from_secs(2)).await;
    ([(CONTENT_TYPE, "application/json")], "{}")
}
