//! Shared Module
//!
//! Types that do not depend on the HTTP layer: wire models exchanged with the
//! CloudVault API, the client error type, and application configuration.
//!
//! # Overview
//!
//! Everything here is plain data. The `client` module builds requests from
//! these types and decodes responses into them.

/// Wire models for files, users, admin, analytics and system endpoints
pub mod models;

/// Client error type
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, FileConfig};
pub use error::ApiError;
pub use models::{FileItem, FilesPage, User};
