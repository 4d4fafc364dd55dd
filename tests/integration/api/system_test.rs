//! Public system endpoints

use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

use cloudvault::shared::models::{ServiceHealth, ServiceState};

use crate::common::TestApi;

#[tokio::test]
async fn test_info_and_health() {
    let t = TestApi::anonymous().await;
    Mock::given(method("GET"))
        .and(path("/api/system/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": "1.4.2",
            "environment": "production",
            "uptime": 86400.0,
            "platform": "linux"
        })))
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "services": { "database": "up", "storage": "up", "cache": "down", "queue": "up" },
            "responseTime": 4.2
        })))
        .mount(&t.server)
        .await;

    let info = assert_ok!(t.api.system().info().await);
    let health = assert_ok!(t.api.system().health().await);

    assert_eq!(info.version, "1.4.2");
    assert_eq!(health.status, ServiceHealth::Healthy);
    assert_eq!(health.services.cache, ServiceState::Down);
}

#[tokio::test]
async fn test_logs_clamp_limit() {
    let t = TestApi::signed_in("tok").await;
    Mock::given(method("GET"))
        .and(path("/api/system/logs"))
        .and(query_param("limit", "100"))
        .and(query_param_is_missing("level"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logs": [{ "level": "info", "message": "started" }]
        })))
        .expect(1)
        .mount(&t.server)
        .await;

    let logs = assert_ok!(t.api.system().logs(None, 5000).await);
    assert_eq!(logs.logs[0].message, "started");
}

#[tokio::test]
async fn test_backup() {
    let t = TestApi::signed_in("tok").await;
    Mock::given(method("POST"))
        .and(path("/api/system/backup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "queued" })))
        .expect(1)
        .mount(&t.server)
        .await;

    let backup = assert_ok!(t.api.system().backup().await);
    assert_eq!(backup.message, "queued");
    assert!(backup.backup_id.is_empty());
}
