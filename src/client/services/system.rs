//! Public system info/health plus the operator backup and log endpoints.

use crate::client::api::{ApiClient, ApiRequest, QueryParams};
use crate::client::endpoints::{system, MAX_LIMIT};
use crate::shared::error::ApiError;
use crate::shared::models::{BackupResponse, HealthCheck, SystemInfo, SystemLogs};

pub struct SystemService<'a> {
    api: &'a ApiClient,
}

impl<'a> SystemService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn info(&self) -> Result<SystemInfo, ApiError> {
        self.api.send(ApiRequest::get(system::INFO)).await
    }

    pub async fn health(&self) -> Result<HealthCheck, ApiError> {
        self.api.send(ApiRequest::get(system::HEALTH)).await
    }

    pub async fn backup(&self) -> Result<BackupResponse, ApiError> {
        self.api.send(ApiRequest::post(system::BACKUP)).await
    }

    pub async fn logs(&self, level: Option<&str>, limit: u32) -> Result<SystemLogs, ApiError> {
        let mut params = QueryParams::new();
        params
            .push("limit", limit.clamp(1, MAX_LIMIT))
            .push_opt("level", level);
        self.api
            .send(ApiRequest::get(system::LOGS).query(params))
            .await
    }
}
