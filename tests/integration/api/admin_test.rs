//! Admin panel integration tests

use assert_matches::assert_matches;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

use cloudvault::client::endpoints::Pagination;
use cloudvault::shared::error::ApiError;
use cloudvault::shared::models::{ActivityKind, HealthStatus, SystemSettingsUpdate, UserAction};

use crate::common::TestApi;

#[tokio::test]
async fn test_overview_fetches_three_resources() {
    let t = TestApi::signed_in("admin-token").await;
    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalUsers": 12,
            "totalFiles": 340,
            "storageUsed": 1048576,
            "storageLimit": 10485760,
            "systemHealth": "warning"
        })))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .and(query_param_is_missing("search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{ "_id": "u1", "name": "Ada", "email": "ada@example.com", "suspended": true, "status": "suspended" }],
            "total": 1
        })))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/activity"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "activities": [{ "id": "a1", "type": "security_event", "user": "ada", "action": "login_failed" }],
            "total": 1
        })))
        .expect(1)
        .mount(&t.server)
        .await;

    let overview = assert_ok!(t.api.admin().overview().await);

    assert_eq!(overview.stats.total_users, 12);
    assert_eq!(overview.stats.system_health, HealthStatus::Warning);
    assert!(overview.users.users[0].suspended);
    assert_eq!(overview.activity.activities[0].kind, ActivityKind::SecurityEvent);
}

#[tokio::test]
async fn test_overview_fails_if_any_part_fails() {
    let t = TestApi::signed_in("tok").await;
    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .with_priority(10)
        .mount(&t.server)
        .await;

    let err = assert_err!(t.api.admin().overview().await);
    assert_matches!(err, ApiError::Forbidden);
}

#[tokio::test]
async fn test_users_search_and_activity_filter() {
    let t = TestApi::signed_in("tok").await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .and(query_param("page", "3"))
        .and(query_param("search", "ada"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [], "total": 0 })))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/activity"))
        .and(query_param("type", "file_action"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "activities": [] })))
        .expect(1)
        .mount(&t.server)
        .await;

    assert_ok!(t.api.admin().users(Pagination::new(3, 20), Some(" ada ")).await);
    assert_ok!(
        t.api
            .admin()
            .activity(Pagination::default(), Some(ActivityKind::FileAction))
            .await
    );
}

#[tokio::test]
async fn test_user_actions_post_to_action_path() {
    let t = TestApi::signed_in("tok").await;
    for action in ["suspend", "activate", "delete"] {
        Mock::given(method("POST"))
            .and(path(format!("/api/admin/users/u-9/{}", action)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": action })))
            .expect(1)
            .mount(&t.server)
            .await;
    }

    for action in [UserAction::Suspend, UserAction::Activate, UserAction::Delete] {
        let response = assert_ok!(t.api.admin().user_action("u-9", action).await);
        assert_eq!(response.message, action.as_str());
    }
}

#[tokio::test]
async fn test_update_system_settings_sends_only_changes() {
    let t = TestApi::signed_in("tok").await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/system-settings"))
        .and(body_json(json!({ "enableRegistration": false, "backupFrequency": "daily" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "saved" })))
        .expect(1)
        .mount(&t.server)
        .await;

    let update = SystemSettingsUpdate {
        enable_registration: Some(false),
        backup_frequency: Some("daily".to_string()),
        ..SystemSettingsUpdate::default()
    };
    assert_ok!(t.api.admin().update_system_settings(&update).await);

    let empty = assert_err!(
        t.api
            .admin()
            .update_system_settings(&SystemSettingsUpdate::default())
            .await
    );
    assert_matches!(empty, ApiError::Validation { .. });
}

#[tokio::test]
async fn test_health_backup_and_logs() {
    let t = TestApi::signed_in("tok").await;
    Mock::given(method("GET"))
        .and(path("/api/admin/system-health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "uptime": 3725.0,
            "memoryUsage": 41.5,
            "activeConnections": 8
        })))
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/backup"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "message": "Backup started",
            "backupId": "b-42"
        })))
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/logs"))
        .and(query_param("limit", "100"))
        .and(query_param("level", "error"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logs": [{ "level": "error", "message": "disk full", "timestamp": "2024-01-01T00:00:00Z", "service": "storage" }],
            "total": 1
        })))
        .mount(&t.server)
        .await;

    let health = assert_ok!(t.api.admin().system_health().await);
    let backup = assert_ok!(t.api.admin().create_backup().await);
    let logs = assert_ok!(t.api.admin().logs(Pagination::new(1, 100), Some("error")).await);

    assert_eq!(health.status, HealthStatus::Healthy);
    assert_eq!(health.active_connections, 8);
    assert_eq!(backup.backup_id, "b-42");
    assert_eq!(logs.logs[0].message, "disk full");
}
