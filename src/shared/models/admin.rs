//! Admin Panel Types
//!
//! Read-only projections fetched for the admin views, plus the few request
//! bodies that trigger remote admin actions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Overall health reported by admin endpoints
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Warning => write!(f, "warning"),
            HealthStatus::Critical => write!(f, "critical"),
            HealthStatus::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub total_files: u64,
    pub total_storage: u64,
    pub active_users: u64,
    pub storage_used: u64,
    pub storage_limit: u64,
    pub new_users_today: u64,
    pub new_files_today: u64,
    pub system_health: HealthStatus,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Suspended,
    Deleted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub last_active: String,
    #[serde(default)]
    pub storage_used: u64,
    #[serde(default)]
    pub file_count: u64,
    #[serde(default)]
    pub suspended: bool,
    #[serde(default)]
    pub status: AccountStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersPage {
    pub users: Vec<AdminUser>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Category of an activity log entry
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    UserAction,
    FileAction,
    SystemEvent,
    SecurityEvent,
    #[default]
    #[serde(other)]
    Other,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::UserAction => "user_action",
            ActivityKind::FileAction => "file_action",
            ActivityKind::SystemEvent => "system_event",
            ActivityKind::SecurityEvent => "security_event",
            ActivityKind::Other => "other",
        }
    }
}

impl FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user_action" => Ok(ActivityKind::UserAction),
            "file_action" => Ok(ActivityKind::FileAction),
            "system_event" => Ok(ActivityKind::SystemEvent),
            "security_event" => Ok(ActivityKind::SecurityEvent),
            other => Err(format!(
                "unknown activity type '{}' (expected user_action, file_action, system_event or security_event)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemActivity {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: ActivityKind,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityPage {
    pub activities: Vec<SystemActivity>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Remote action applied to a user account from the admin panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Suspend,
    Activate,
    Delete,
}

impl UserAction {
    /// Path segment used in `/admin/users/{id}/{action}`
    pub fn as_str(&self) -> &'static str {
        match self {
            UserAction::Suspend => "suspend",
            UserAction::Activate => "activate",
            UserAction::Delete => "delete",
        }
    }
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemHealth {
    pub status: HealthStatus,
    /// Seconds
    pub uptime: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
    pub active_connections: u64,
    pub last_backup: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemSettings {
    pub max_file_size: u64,
    pub allowed_file_types: Vec<String>,
    pub storage_quota_per_user: u64,
    pub enable_registration: bool,
    pub enable_file_sharing: bool,
    pub backup_frequency: String,
}

/// Partial update for `PUT /admin/system-settings`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_file_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_quota_per_user: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_registration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_file_sharing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_frequency: Option<String>,
}

impl SystemSettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.max_file_size.is_none()
            && self.allowed_file_types.is_none()
            && self.storage_quota_per_user.is_none()
            && self.enable_registration.is_none()
            && self.enable_file_sharing.is_none()
            && self.backup_frequency.is_none()
    }
}

/// A server log line, shared by the admin and system log endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub level: String,
    pub message: String,
    pub timestamp: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogsPage {
    pub logs: Vec<LogEntry>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}
