//! Profile, password, preferences and account deletion for the current user.

use crate::client::api::{ApiClient, ApiRequest};
use crate::client::endpoints::{ensure_id, users};
use crate::client::validation::{validate_email, validate_password_change};
use crate::shared::error::ApiError;
use crate::shared::models::{
    ChangePasswordRequest, MessageResponse, UpdateProfileRequest, UserProfile, UserSettings,
};

pub struct UserService<'a> {
    api: &'a ApiClient,
}

impl<'a> UserService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.api.send(ApiRequest::get(users::ME)).await
    }

    pub async fn update_profile(&self, name: &str, email: &str) -> Result<UserProfile, ApiError> {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name", "Name is required"));
        }
        validate_email(email)?;
        let request = ApiRequest::put(users::ME).json(&UpdateProfileRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        })?;
        self.api.send(request).await
    }

    /// `confirmation` must repeat `new_password`; checked before sending.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
        confirmation: &str,
    ) -> Result<MessageResponse, ApiError> {
        if current_password.is_empty() {
            return Err(ApiError::validation("currentPassword", "Current password is required"));
        }
        validate_password_change(new_password, confirmation)?;
        let request = ApiRequest::post(users::CHANGE_PASSWORD).json(&ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        })?;
        self.api.send(request).await
    }

    pub async fn settings(&self) -> Result<UserSettings, ApiError> {
        self.api.send(ApiRequest::get(users::SETTINGS)).await
    }

    /// Only the fields set in `settings` are sent.
    pub async fn update_settings(&self, settings: &UserSettings) -> Result<MessageResponse, ApiError> {
        if *settings == UserSettings::default() {
            return Err(ApiError::validation("settings", "Nothing to update"));
        }
        let request = ApiRequest::put(users::SETTINGS).json(settings)?;
        self.api.send(request).await
    }

    /// Permanently delete the account, then sign out locally.
    pub async fn delete_account(&self) -> Result<MessageResponse, ApiError> {
        let response = self.api.send(ApiRequest::delete(users::ME)).await?;
        self.api.session().sign_out().await;
        Ok(response)
    }

    pub async fn by_id(&self, id: &str) -> Result<UserProfile, ApiError> {
        let id = ensure_id("user id", id)?;
        self.api.send(ApiRequest::get(users::by_id(id))).await
    }
}
