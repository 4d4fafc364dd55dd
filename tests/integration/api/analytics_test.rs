//! Dashboard analytics integration tests

use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::TestApi;

#[tokio::test]
async fn test_dashboard_joins_three_aggregates() {
    let t = TestApi::signed_in("tok").await;
    let now: DateTime<Utc> = "2024-06-15T12:00:00Z".parse().unwrap();
    let yesterday = (now - Duration::days(1)).to_rfc3339();
    let last_month = (now - Duration::days(30)).to_rfc3339();

    Mock::given(method("GET"))
        .and(path("/api/analytics/user/storage-usage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "storageUsed": 250,
            "storageLimit": 1000,
            "remainingStorage": 750
        })))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/user/file-types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fileTypes": [{ "type": "image", "count": 3, "totalSize": 200 }]
        })))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/user/user-activity"))
        .and(query_param("timeRange", "30d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "activities": [
                { "action": "upload", "fileName": "new.png", "timestamp": yesterday, "fileSize": 10 },
                { "action": "upload", "fileName": "old.png", "timestamp": last_month, "fileSize": 10 }
            ]
        })))
        .expect(1)
        .mount(&t.server)
        .await;

    let dashboard = assert_ok!(t.api.analytics().dashboard(now).await);

    assert_eq!(dashboard.storage.remaining_storage, 750);
    assert_eq!(dashboard.file_types.file_types[0].kind, "image");
    assert_eq!(dashboard.activity.activities.len(), 2);
    assert_eq!(dashboard.recent.len(), 1);
    assert_eq!(dashboard.recent[0].file_name, "new.png");
}

#[tokio::test]
async fn test_user_activity_time_range_passthrough() {
    let t = TestApi::signed_in("tok").await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/user/user-activity"))
        .and(query_param("timeRange", "7d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "activities": [] })))
        .expect(1)
        .mount(&t.server)
        .await;

    let activity = assert_ok!(t.api.analytics().user_activity("7d").await);
    assert!(activity.activities.is_empty());
}
