//! Resource Services
//!
//! One service per REST resource. Each borrows the shared [`ApiClient`] and
//! maps a call to exactly one request (the dashboard and admin overview
//! helpers fan out to three, concurrently). None of them touch headers or
//! status codes; that is the client's job.
//!
//! ```rust,no_run
//! # use cloudvault::client::ApiClient;
//! # async fn example(api: &ApiClient) -> Result<(), cloudvault::shared::ApiError> {
//! let stats = api.admin().stats().await?;
//! let page = api.files().list(&Default::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod analytics;
pub mod auth;
pub mod files;
pub mod system;
pub mod users;

pub use admin::{AdminOverview, AdminService};
pub use analytics::{AnalyticsService, Dashboard};
pub use auth::AuthService;
pub use files::FileService;
pub use system::SystemService;
pub use users::UserService;

use crate::client::api::ApiClient;

impl ApiClient {
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self)
    }

    pub fn files(&self) -> FileService<'_> {
        FileService::new(self)
    }

    pub fn users(&self) -> UserService<'_> {
        UserService::new(self)
    }

    pub fn admin(&self) -> AdminService<'_> {
        AdminService::new(self)
    }

    pub fn analytics(&self) -> AnalyticsService<'_> {
        AnalyticsService::new(self)
    }

    pub fn system(&self) -> SystemService<'_> {
        SystemService::new(self)
    }
}
