//! CloudVault - Client Library
//!
//! Typed client for the CloudVault file-storage REST API: authentication,
//! file upload/browse/search, user settings, per-user analytics and the admin
//! panel.
//!
//! # Module Structure
//!
//! - **`shared`** - Plain data shared by every layer
//!   - Wire models (`FileItem`, `User`, `AdminStats`, ...)
//!   - The `ApiError` type
//!   - Layered configuration (`AppConfig`)
//!
//! - **`client`** - Everything that talks HTTP
//!   - `ApiClient`: the single request layer (bearer auth, error mapping)
//!   - `Session` and token stores
//!   - Resource services (`auth`, `files`, `users`, `admin`, `analytics`, `system`)
//!   - Search filter composition, batch upload and display helpers
//!
//! The `cloudvault` binary (`src/cli`) is a thin command-line front end over
//! the services.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cloudvault::client::{ApiClient, MemoryTokenStore, Session};
//! use cloudvault::client::services::FileService;
//! use cloudvault::client::search::{SearchFilters, SortKey, SortOrder};
//! use cloudvault::shared::AppConfig;
//!
//! # async fn example() -> Result<(), cloudvault::shared::ApiError> {
//! let config = AppConfig::builder().api_url("http://localhost:3001/api").build()?;
//! let session = Arc::new(Session::new(Box::new(MemoryTokenStore::default())));
//! let api = ApiClient::new(config, session)?;
//!
//! let filters = SearchFilters::new("invoice")
//!     .with_file_type("pdf")
//!     .sorted_by(SortKey::Size, SortOrder::Asc);
//! let page = FileService::new(&api).search(&filters).await?;
//! println!("{} matches", page.total);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Every fallible call returns `Result<T, ApiError>`. A 401 from any endpoint
//! clears the stored token and moves the session to anonymous before the
//! error is returned; nothing is retried.

/// Shared types and data structures
pub mod shared;

/// HTTP client, session and services
pub mod client;
