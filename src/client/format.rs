//! Display helpers for file sizes, types and timestamps.
//!
//! Presentation only. Nothing here feeds back into a request.

use chrono::{DateTime, Utc};

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Human-readable size with 1024-based units, e.g. `1.5 KB`, `0 Bytes`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// Short badge for a MIME type: the upper-cased subtype, or `FILE`.
pub fn type_badge(mime_type: &str) -> String {
    match mime_type.split('/').nth(1) {
        Some(subtype) if !subtype.is_empty() => subtype.to_uppercase(),
        _ => "FILE".to_string(),
    }
}

/// Coarse grouping used to colour or group files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Image,
    Video,
    Audio,
    Pdf,
    Document,
    Other,
}

impl FileCategory {
    pub fn from_mime(mime_type: &str) -> Self {
        let mime = mime_type.to_ascii_lowercase();
        if mime.contains("image") {
            FileCategory::Image
        } else if mime.contains("video") {
            FileCategory::Video
        } else if mime.contains("audio") {
            FileCategory::Audio
        } else if mime.contains("pdf") {
            FileCategory::Pdf
        } else if mime.contains("text") || mime.contains("document") {
            FileCategory::Document
        } else {
            FileCategory::Other
        }
    }
}

/// `Mar 1, 2024 10:15` in UTC. Unparseable input is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc).format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Uptime such as `3d 4h 5m`; under a minute prints seconds.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "-".to_string();
    }
    let total = seconds as u64;
    if total < 60 {
        return format!("{}s", total);
    }
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 || days > 0 {
        parts.push(format!("{}h", hours));
    }
    parts.push(format!("{}m", minutes));
    parts.join(" ")
}

/// Share of `limit` in use, 0-100. A zero limit reads as 0%.
pub fn storage_percent(used: u64, limit: u64) -> f64 {
    if limit == 0 {
        return 0.0;
    }
    (used as f64 / limit as f64 * 100.0).min(100.0)
}
