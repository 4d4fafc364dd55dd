//! Wire Models
//!
//! Plain records exchanged with the CloudVault API. All authoritative state
//! lives server-side; these types are projections for display and request
//! bodies.
//!
//! - `file` - `FileItem`, paging, share and filter-option types
//! - `user` - session identity, auth bodies, profile and settings
//! - `admin` - admin stats, users, activity, health, settings, logs
//! - `analytics` - per-user storage and activity aggregates
//! - `system` - public info and health check
//!
//! # Usage
//!
//! ```rust
//! use cloudvault::shared::models::{FileItem, User, AdminStats};
//! ```

pub mod admin;
pub mod analytics;
pub mod file;
pub mod system;
pub mod user;

use serde::{Deserialize, Serialize};

pub use admin::{
    AccountStatus, ActivityKind, ActivityPage, AdminStats, AdminUser, HealthStatus, LogEntry,
    LogsPage, SystemActivity, SystemHealth, SystemSettings, SystemSettingsUpdate, UserAction,
    UsersPage,
};
pub use analytics::{ActivityRecord, FileTypeAnalytics, FileTypeStat, StorageUsage, UserActivity};
pub use file::{
    FileItem, FileOwner, FilesPage, FilterOption, FilterOptions, ShareLink, ShareOptions,
    UpdateFileRequest,
};
pub use system::{HealthCheck, ServiceHealth, ServiceState, ServiceStates, SystemInfo, SystemLogs};
pub use user::{
    AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest, TokenResponse,
    UpdateProfileRequest, User, UserProfile, UserSettings,
};

/// Generic `{ "message": ... }` acknowledgement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    pub message: String,
}

/// Acknowledgement for backup requests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackupResponse {
    pub message: String,
    pub backup_id: String,
}
