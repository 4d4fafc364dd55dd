//! Admin panel service
//!
//! Read-only projections (stats, users, activity, health, settings, logs) and
//! the few remote actions an admin can trigger. The client never derives any
//! of these numbers itself.

use tracing::info;

use crate::client::api::{ApiClient, ApiRequest, QueryParams};
use crate::client::endpoints::{admin, ensure_id, Pagination};
use crate::shared::error::ApiError;
use crate::shared::models::{
    ActivityKind, ActivityPage, AdminStats, BackupResponse, LogsPage, MessageResponse,
    SystemHealth, SystemSettings, SystemSettingsUpdate, UserAction, UsersPage,
};

pub const DEFAULT_ACTIVITY_LIMIT: u32 = 50;
pub const DEFAULT_LOG_LIMIT: u32 = 100;

/// Everything the admin overview shows, fetched together
#[derive(Debug, Clone)]
pub struct AdminOverview {
    pub stats: AdminStats,
    pub users: UsersPage,
    pub activity: ActivityPage,
}

pub struct AdminService<'a> {
    api: &'a ApiClient,
}

fn page_params(pagination: Pagination) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push("page", pagination.page)
        .push("limit", pagination.limit);
    params
}

impl<'a> AdminService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn stats(&self) -> Result<AdminStats, ApiError> {
        self.api.send(ApiRequest::get(admin::STATS)).await
    }

    pub async fn users(&self, pagination: Pagination, search: Option<&str>) -> Result<UsersPage, ApiError> {
        let mut params = page_params(pagination);
        params.push_opt("search", search.map(str::trim));
        self.api
            .send(ApiRequest::get(admin::USERS).query(params))
            .await
    }

    pub async fn activity(
        &self,
        pagination: Pagination,
        kind: Option<ActivityKind>,
    ) -> Result<ActivityPage, ApiError> {
        let mut params = page_params(pagination);
        params.push_opt("type", kind.map(|k| k.as_str()));
        self.api
            .send(ApiRequest::get(admin::ACTIVITY).query(params))
            .await
    }

    /// Stats, first page of users and recent activity, requested concurrently.
    pub async fn overview(&self) -> Result<AdminOverview, ApiError> {
        let (stats, users, activity) = tokio::try_join!(
            self.stats(),
            self.users(Pagination::default(), None),
            self.activity(Pagination::new(1, DEFAULT_ACTIVITY_LIMIT), None),
        )?;
        Ok(AdminOverview {
            stats,
            users,
            activity,
        })
    }

    pub async fn user_action(&self, user_id: &str, action: UserAction) -> Result<MessageResponse, ApiError> {
        let user_id = ensure_id("user id", user_id)?;
        let response = self
            .api
            .send(ApiRequest::post(admin::user_action(user_id, action)))
            .await?;
        info!(user_id, %action, "admin action applied");
        Ok(response)
    }

    pub async fn system_health(&self) -> Result<SystemHealth, ApiError> {
        self.api.send(ApiRequest::get(admin::SYSTEM_HEALTH)).await
    }

    pub async fn system_settings(&self) -> Result<SystemSettings, ApiError> {
        self.api.send(ApiRequest::get(admin::SYSTEM_SETTINGS)).await
    }

    pub async fn update_system_settings(
        &self,
        update: &SystemSettingsUpdate,
    ) -> Result<MessageResponse, ApiError> {
        if update.is_empty() {
            return Err(ApiError::validation("settings", "Nothing to update"));
        }
        let request = ApiRequest::put(admin::SYSTEM_SETTINGS).json(update)?;
        self.api.send(request).await
    }

    pub async fn create_backup(&self) -> Result<BackupResponse, ApiError> {
        self.api.send(ApiRequest::post(admin::BACKUP)).await
    }

    pub async fn logs(&self, pagination: Pagination, level: Option<&str>) -> Result<LogsPage, ApiError> {
        let mut params = page_params(pagination);
        params.push_opt("level", level);
        self.api
            .send(ApiRequest::get(admin::LOGS).query(params))
            .await
    }
}
