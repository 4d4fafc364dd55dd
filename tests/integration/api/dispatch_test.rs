//! Request layer tests: auth header, status mapping, 401 handling, decoding.

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use cloudvault::client::search::SearchFilters;
use cloudvault::client::{ApiClient, ApiRequest, MemoryTokenStore, ResponseBody, Session, SessionState};
use cloudvault::shared::error::{ApiError, NETWORK_ERROR_MESSAGE};
use cloudvault::shared::models::{AuthResponse, User};
use cloudvault::shared::AppConfig;

use crate::common::{files_page_json, TestApi};

#[tokio::test]
async fn test_bearer_header_attached() {
    let t = TestApi::signed_in("secret-token").await;
    Mock::given(method("GET"))
        .and(path("/api/files"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(files_page_json(vec![])))
        .expect(1)
        .mount(&t.server)
        .await;

    let page = assert_ok!(t.api.files().list(&SearchFilters::default()).await);
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_no_header_without_token() {
    let t = TestApi::anonymous().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "healthy" })))
        .mount(&t.server)
        .await;

    assert_ok!(t.api.system().health().await);

    let requests = t.server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_every_error_status_has_a_message() {
    let t = TestApi::signed_in("tok").await;
    for status in [400u16, 403, 404, 409, 413, 422, 429, 500, 502, 503] {
        t.server.reset().await;
        Mock::given(method("GET"))
            .and(path("/api/system/info"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&t.server)
            .await;

        let err = assert_err!(t.api.system().info().await);
        crate::assert_user_message!(err);
        assert_eq!(err.status(), Some(status));
    }
}

#[tokio::test]
async fn test_fixed_messages_ignore_body() {
    let t = TestApi::signed_in("tok").await;
    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "message": "admins only, go away" })),
        )
        .mount(&t.server)
        .await;

    let err = assert_err!(t.api.admin().stats().await);

    assert_matches!(err, ApiError::Forbidden);
    assert_eq!(err.user_message(), "Access forbidden");
}

#[tokio::test]
async fn test_server_and_rate_limit_messages() {
    let t = TestApi::signed_in("tok").await;
    Mock::given(method("GET"))
        .and(path("/api/files/f1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/files/f2"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&t.server)
        .await;

    let server = assert_err!(t.api.files().get("f1").await);
    let limited = assert_err!(t.api.files().get("f2").await);

    assert_eq!(server.user_message(), "Server error. Please try again later.");
    assert_eq!(limited.user_message(), "Too many requests. Please try again later.");
}

#[tokio::test]
async fn test_unauthorized_clears_token_once_and_does_not_retry() {
    let t = TestApi::signed_in("expired").await;
    Mock::given(method("GET"))
        .and(path("/api/files"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&t.server)
        .await;

    let err = assert_err!(t.api.files().list(&SearchFilters::default()).await);

    assert_matches!(err, ApiError::Unauthorized);
    assert_eq!(err.user_message(), "Authentication required");
    assert_eq!(t.store.clears(), 1);
    assert!(t.store.stored().is_none());
    assert!(t.api.session().token().await.is_none());
    assert_eq!(t.api.session().state().await, SessionState::Anonymous);
    assert_eq!(t.request_count().await, 1);
}

#[tokio::test]
async fn test_late_unauthorized_keeps_newer_sign_in() {
    let t = TestApi::signed_in("old").await;
    Mock::given(method("GET"))
        .and(path("/api/files"))
        .and(header("authorization", "Bearer old"))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&t.server)
        .await;

    let filters = SearchFilters::default();
    let files = t.api.files();
    let (listed, _) = tokio::join!(files.list(&filters), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        t.api
            .session()
            .sign_in(AuthResponse {
                user: User {
                    id: "u-1".to_string(),
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                    role: "user".to_string(),
                },
                token: "fresh".to_string(),
            })
            .await
    });

    assert_matches!(listed, Err(ApiError::Unauthorized));
    assert_eq!(t.api.session().token().await.as_deref(), Some("fresh"));
    assert_eq!(t.store.stored().as_deref(), Some("fresh"));
    assert_eq!(t.store.clears(), 0);
    assert!(t.api.session().is_authenticated().await);
}

#[tokio::test]
async fn test_request_after_expiry_is_unauthenticated() {
    let t = TestApi::signed_in("expired").await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&t.server)
        .await;

    assert_err!(t.api.users().profile().await);
    assert_err!(t.api.users().profile().await);

    let requests = t.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].headers.get("authorization").is_some());
    assert!(requests[1].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_json_and_text_bodies() {
    let t = TestApi::anonymous().await;
    Mock::given(method("GET"))
        .and(path("/api/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/text"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&t.server)
        .await;

    let json_body = assert_ok!(t.api.send_raw(ApiRequest::get("/json")).await);
    let text_body = assert_ok!(t.api.send_raw(ApiRequest::get("/text")).await);

    assert_eq!(json_body, ResponseBody::Json(json!({ "ok": true })));
    assert_eq!(text_body, ResponseBody::Text("pong".to_string()));
}

#[tokio::test]
async fn test_unexpected_shape_is_decode_error() {
    let t = TestApi::signed_in("tok").await;
    Mock::given(method("GET"))
        .and(path("/api/files/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": [1, 2] })))
        .mount(&t.server)
        .await;

    let err = assert_err!(t.api.files().get("abc").await);

    assert_matches!(err, ApiError::Decode { .. });
    crate::assert_contains!(err.user_message(), "Unexpected response");
}

#[tokio::test]
async fn test_text_body_for_typed_call_is_decode_error() {
    let t = TestApi::anonymous().await;
    Mock::given(method("GET"))
        .and(path("/api/system/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy page</html>"))
        .mount(&t.server)
        .await;

    let err = assert_err!(t.api.system().info().await);
    assert_matches!(err, ApiError::Decode { .. });
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = AppConfig::builder()
        .api_url("http://127.0.0.1:9/api")
        .build()
        .unwrap();
    let session = Arc::new(Session::new(Box::new(MemoryTokenStore::with_token("tok"))));
    let api = ApiClient::new(config, session).unwrap();

    let err = assert_err!(api.send::<Value>(ApiRequest::get("/health")).await);

    assert_matches!(err, ApiError::Network(_));
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
    assert_eq!(api.session().token().await.as_deref(), Some("tok"));
}
