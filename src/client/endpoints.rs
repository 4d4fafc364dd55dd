//! API endpoint paths
//!
//! Paths are relative to the configured base URL. Resource ids are opaque
//! strings issued by the server and are checked with [`ensure_id`] before
//! they are spliced into a path.

use crate::shared::error::ApiError;

pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const ME: &str = "/auth/me";
    pub const REFRESH: &str = "/auth/refresh";
    pub const LOGOUT: &str = "/auth/logout";
}

pub mod files {
    pub const BASE: &str = "/files";
    pub const UPLOAD: &str = "/files/upload";
    pub const SEARCH: &str = "/files/search/user";
    pub const FILTERS: &str = "/files/filters";

    pub fn by_id(id: &str) -> String {
        format!("/files/{}", id)
    }

    pub fn download(id: &str) -> String {
        format!("/files/{}/download", id)
    }

    pub fn share(id: &str) -> String {
        format!("/files/{}/share", id)
    }
}

pub mod users {
    pub const ME: &str = "/users/me";
    pub const CHANGE_PASSWORD: &str = "/users/change-password";
    pub const SETTINGS: &str = "/users/settings";

    pub fn by_id(id: &str) -> String {
        format!("/users/{}", id)
    }
}

pub mod admin {
    use crate::shared::models::UserAction;

    pub const STATS: &str = "/admin/stats";
    pub const USERS: &str = "/admin/users";
    pub const ACTIVITY: &str = "/admin/activity";
    pub const SYSTEM_HEALTH: &str = "/admin/system-health";
    pub const SYSTEM_SETTINGS: &str = "/admin/system-settings";
    pub const BACKUP: &str = "/admin/backup";
    pub const LOGS: &str = "/admin/logs";

    pub fn user_action(id: &str, action: UserAction) -> String {
        format!("/admin/users/{}/{}", id, action.as_str())
    }
}

pub mod analytics {
    pub const STORAGE_USAGE: &str = "/analytics/user/storage-usage";
    pub const FILE_TYPES: &str = "/analytics/user/file-types";
    pub const USER_ACTIVITY: &str = "/analytics/user/user-activity";
}

pub mod system {
    pub const INFO: &str = "/system/info";
    pub const HEALTH: &str = "/health";
    pub const BACKUP: &str = "/system/backup";
    pub const LOGS: &str = "/system/logs";
}

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

/// Page/limit pair clamped to what the API accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// Reject ids that would change the shape of the request path.
pub fn ensure_id<'a>(field: &str, id: &'a str) -> Result<&'a str, ApiError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::validation(field, format!("{} is required", field)));
    }
    if id.contains(['/', '?', '#', '%']) || id.chars().any(char::is_whitespace) {
        return Err(ApiError::validation(
            field,
            format!("'{}' is not a valid {}", id, field),
        ));
    }
    Ok(id)
}
