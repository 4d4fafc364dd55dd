//! HTTP Client Module
//!
//! Everything that talks to the CloudVault API.
//!
//! - `api` - [`ApiClient`], the single request/response layer
//! - `session` - signed-in state and the token it carries
//! - `token_store` - where the token lives between runs
//! - `config` - resolving [`AppConfig`](crate::shared::AppConfig) from flags, env and file
//! - `services` - one typed service per REST resource
//! - `search` - search filter composition
//! - `upload` - pre-flight checks and progress for uploads
//! - `validation` - form checks run before a request is sent
//! - `format` - display helpers for sizes, dates and file types

pub mod api;
pub mod config;
pub mod endpoints;
pub mod format;
pub mod search;
pub mod services;
pub mod session;
pub mod token_store;
pub mod upload;
pub mod validation;

pub use api::{ApiClient, ApiRequest, QueryParams, ResponseBody};
pub use config::Config;
pub use endpoints::Pagination;
pub use session::{Session, SessionState};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
