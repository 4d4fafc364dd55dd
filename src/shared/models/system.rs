//! Public system endpoints: version info and liveness.

use serde::{Deserialize, Serialize};

use super::admin::LogEntry;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemInfo {
    pub version: String,
    pub environment: String,
    pub uptime: f64,
    pub node_version: String,
    pub platform: String,
    pub architecture: String,
    pub total_memory: u64,
    pub free_memory: u64,
    pub cpu_usage: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceHealth {
    Healthy,
    Degraded,
    Unhealthy,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Up,
    Down,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceStates {
    pub database: ServiceState,
    pub storage: ServiceState,
    pub cache: ServiceState,
    pub queue: ServiceState,
}

impl ServiceStates {
    /// Name/state pairs in display order
    pub fn entries(&self) -> [(&'static str, ServiceState); 4] {
        [
            ("database", self.database),
            ("storage", self.storage),
            ("cache", self.cache),
            ("queue", self.queue),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HealthCheck {
    pub status: ServiceHealth,
    pub timestamp: String,
    pub services: ServiceStates,
    /// Milliseconds
    pub response_time: f64,
}

/// Response from `GET /system/logs`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemLogs {
    pub logs: Vec<LogEntry>,
}
