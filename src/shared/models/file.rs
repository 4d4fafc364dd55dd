//! File Data Structures
//!
//! Records describing stored files. The server owns them; the client only
//! reads them and asks for explicit updates or deletes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner block embedded in every file record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileOwner {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// One stored file and its metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileItem {
    /// Server-assigned id (`_id` on the wire)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
    /// MIME type (`type` on the wire)
    #[serde(rename = "type", default)]
    pub mime_type: String,
    /// RFC 3339 upload timestamp
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<FileOwner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_count: Option<u64>,
}

impl FileItem {
    /// Parsed upload time, if the server sent a valid RFC 3339 timestamp
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Paged list of files, shared by `/files` and `/files/search/user`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesPage {
    pub files: Vec<FileItem>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Body for `PUT /files/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body for `POST /files/{id}/share`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareOptions {
    /// Lifetime such as `7d`, interpreted by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Response from the share endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    pub share_url: String,
    pub share_id: String,
}

/// A selectable filter value offered by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// Response from `GET /files/filters`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterOptions {
    pub file_types: Vec<FilterOption>,
    pub date_ranges: Vec<FilterOption>,
    pub size_ranges: Vec<FilterOption>,
}
