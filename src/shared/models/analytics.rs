//! Per-user analytics aggregates shown on the dashboard.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageUsage {
    pub storage_used: u64,
    pub storage_limit: u64,
    pub remaining_storage: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileTypeStat {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u64,
    pub total_size: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileTypeAnalytics {
    pub file_types: Vec<FileTypeStat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityRecord {
    pub action: String,
    pub user: String,
    pub file_name: String,
    pub timestamp: String,
    pub file_size: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserActivity {
    pub activities: Vec<ActivityRecord>,
}
