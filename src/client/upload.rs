//! Upload pre-flight checks and progress reporting.
//!
//! Batch uploads run sequentially (see `FileService::upload_batch`). Every
//! file is inspected before the first byte is sent so that a bad selection
//! fails up front instead of half-way through.

use std::path::{Path, PathBuf};

use crate::shared::error::ApiError;

/// Largest file the service accepts (100 MiB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Accepted MIME types. `type/*` matches any subtype.
pub const ALLOWED_TYPES: &[&str] = &[
    "image/*",
    "video/*",
    "audio/*",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "text/*",
    "application/zip",
    "application/x-rar-compressed",
    "application/vnd.rar",
];

pub fn is_allowed_type(mime_type: &str) -> bool {
    let mime = mime_type.to_ascii_lowercase();
    ALLOWED_TYPES.iter().any(|allowed| match allowed.strip_suffix("/*") {
        Some(prefix) => mime
            .split_once('/')
            .map(|(top, _)| top == prefix)
            .unwrap_or(false),
        None => mime == *allowed,
    })
}

/// A local file that passed the pre-flight checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
    pub mime_type: String,
}

/// Check that `path` is a regular file within the size limit and of an
/// accepted type.
pub fn inspect(path: &Path) -> Result<UploadCandidate, ApiError> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(ApiError::validation(
            "file",
            format!("{} is not a regular file", path.display()),
        ));
    }
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| {
            ApiError::validation("file", format!("{} has no usable file name", path.display()))
        })?
        .to_string();
    if metadata.len() > MAX_FILE_SIZE {
        return Err(ApiError::validation(
            "file",
            format!("{} is larger than the 100 MB limit", file_name),
        ));
    }
    let mime_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    if !is_allowed_type(&mime_type) {
        return Err(ApiError::validation(
            "file",
            format!("{} has an unsupported type ({})", file_name, mime_type),
        ));
    }
    Ok(UploadCandidate {
        path: path.to_path_buf(),
        file_name,
        size: metadata.len(),
        mime_type,
    })
}

/// Progress of a batch upload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UploadProgress {
    pub completed: usize,
    pub total: usize,
}

impl UploadProgress {
    /// 0.0 to 100.0
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    pub fn is_done(&self) -> bool {
        self.completed >= self.total
    }
}
