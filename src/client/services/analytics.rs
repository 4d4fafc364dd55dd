//! Per-user analytics and the dashboard summary built from them.

use chrono::{DateTime, Duration, Utc};

use crate::client::api::{ApiClient, ApiRequest, QueryParams};
use crate::client::endpoints::analytics;
use crate::shared::error::ApiError;
use crate::shared::models::{ActivityRecord, FileTypeAnalytics, StorageUsage, UserActivity};

pub const DEFAULT_TIME_RANGE: &str = "30d";

/// How far back the dashboard's "recent uploads" reach
pub const RECENT_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub storage: StorageUsage,
    pub file_types: FileTypeAnalytics,
    pub activity: UserActivity,
    /// Activities from the last [`RECENT_WINDOW_DAYS`] days
    pub recent: Vec<ActivityRecord>,
}

pub struct AnalyticsService<'a> {
    api: &'a ApiClient,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn storage_usage(&self) -> Result<StorageUsage, ApiError> {
        self.api.send(ApiRequest::get(analytics::STORAGE_USAGE)).await
    }

    pub async fn file_types(&self) -> Result<FileTypeAnalytics, ApiError> {
        self.api.send(ApiRequest::get(analytics::FILE_TYPES)).await
    }

    /// `time_range` is passed through as-is (`7d`, `30d`, ...)
    pub async fn user_activity(&self, time_range: &str) -> Result<UserActivity, ApiError> {
        let mut params = QueryParams::new();
        params.push("timeRange", time_range.trim());
        self.api
            .send(ApiRequest::get(analytics::USER_ACTIVITY).query(params))
            .await
    }

    /// All three aggregates, requested concurrently.
    pub async fn dashboard(&self, now: DateTime<Utc>) -> Result<Dashboard, ApiError> {
        let (storage, file_types, activity) = tokio::try_join!(
            self.storage_usage(),
            self.file_types(),
            self.user_activity(DEFAULT_TIME_RANGE),
        )?;
        let recent = recent_uploads(&activity.activities, now);
        Ok(Dashboard {
            storage,
            file_types,
            activity,
            recent,
        })
    }
}

/// Entries no older than seven days before `now`. Entries with an
/// unreadable timestamp are left out.
pub fn recent_uploads(activities: &[ActivityRecord], now: DateTime<Utc>) -> Vec<ActivityRecord> {
    let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
    activities
        .iter()
        .filter(|activity| {
            DateTime::parse_from_rfc3339(&activity.timestamp)
                .map(|ts| ts.with_timezone(&Utc) >= cutoff)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}
