//! The reqwest adapter against a local HTTP server.

use std::sync::Arc;
use std::time::Duration;

use medref::adapters::ReqwestHttpClient;
use medref::api::ApiClient;
use medref::error::{ClientError, FailureKind};
use medref::models::{AdminStats, LoginForm};
use medref::traits::{Headers, HttpClient, HttpError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "email": "a@b.c", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "name": "Admin",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(Arc::new(ReqwestHttpClient::new()), server.uri());
    let envelope = api
        .post::<_, serde_json::Value>("/admin/login", &LoginForm::new("a@b.c", "pw"))
        .await
        .unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.name.as_deref(), Some("Admin"));
}

#[tokio::test]
async fn unauthorized_envelope_is_an_application_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/stats"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false, "message": "Unauthorized",
        })))
        .mount(&server)
        .await;

    let api = ApiClient::new(Arc::new(ReqwestHttpClient::new()), server.uri());
    let err = api
        .get::<AdminStats>("/admin/stats")
        .await
        .and_then(|envelope| envelope.into_data("Could not load stats"))
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::Application);
    assert_eq!(err.user_message(), "Unauthorized");
}

#[tokio::test]
async fn non_json_error_page_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/tip/1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad gateway</html>"))
        .mount(&server)
        .await;

    let api = ApiClient::new(Arc::new(ReqwestHttpClient::new()), server.uri());
    let err = api
        .delete::<serde_json::Value>("/admin/tip/1")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Status { status: 502 }));
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[tokio::test]
async fn timeout_maps_to_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health-tips"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "data": {} }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::with_timeout(Some(Duration::from_millis(50)));
    let result = client
        .get(&format!("{}/api/health-tips", server.uri()), &Headers::new())
        .await;

    assert!(matches!(result, Err(HttpError::Timeout(_))));
}

#[tokio::test]
async fn session_cookie_is_replayed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc123; Path=/")
                .set_body_json(json!({ "success": true })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/check"))
        .and(header("cookie", "session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "name": "Admin",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(Arc::new(ReqwestHttpClient::new()), server.uri());
    api.post::<_, serde_json::Value>("/admin/login", &LoginForm::new("a", "b"))
        .await
        .unwrap();
    let check = api.get::<serde_json::Value>("/admin/check").await.unwrap();

    assert!(check.success);
}
