//! Authentication service: login, register, session restore, refresh, logout.

use tracing::{debug, warn};

use crate::client::api::{ApiClient, ApiRequest};
use crate::client::endpoints::auth;
use crate::client::session::SessionState;
use crate::client::validation::{validate_login, validate_registration};
use crate::shared::error::ApiError;
use crate::shared::models::{AuthResponse, LoginRequest, RegisterRequest, TokenResponse, User};

pub struct AuthService<'a> {
    api: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Exchange credentials for a token and mark the session authenticated.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        validate_login(email, password)?;
        let request = ApiRequest::post(auth::LOGIN)
            .credentials("Login failed")
            .json(&LoginRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
            })?;
        let response: AuthResponse = self.api.send(request).await?;
        Ok(self.api.session().sign_in(response).await)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        validate_registration(name, email, password)?;
        let request = ApiRequest::post(auth::REGISTER)
            .credentials("Registration failed")
            .json(&RegisterRequest {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                password: password.to_string(),
            })?;
        let response: AuthResponse = self.api.send(request).await?;
        Ok(self.api.session().sign_in(response).await)
    }

    /// The user the current token belongs to
    pub async fn me(&self) -> Result<User, ApiError> {
        if self.api.session().token().await.is_none() {
            return Err(ApiError::NotAuthenticated);
        }
        self.api.send(ApiRequest::get(auth::ME)).await
    }

    /// Resolve a `Loading` session from the stored token.
    ///
    /// No token, or a token the server rejects, ends `Anonymous` with the
    /// token discarded. If the server cannot be reached the session ends
    /// `Anonymous` but keeps the token, and the error is returned.
    pub async fn restore(&self) -> Result<SessionState, ApiError> {
        let session = self.api.session();
        if session.token().await.is_none() {
            return Ok(session.resolve(None).await);
        }
        match self.me().await {
            Ok(user) => Ok(session.resolve(Some(user)).await),
            Err(ApiError::Network(e)) => {
                session.abandon_restore().await;
                Err(ApiError::Network(e))
            }
            Err(e) => {
                debug!(error = %e, "stored token is not usable");
                Ok(session.resolve(None).await)
            }
        }
    }

    /// Trade the current token for a fresh one.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        if self.api.session().token().await.is_none() {
            return Err(ApiError::NotAuthenticated);
        }
        let response: TokenResponse = self.api.send(ApiRequest::post(auth::REFRESH)).await?;
        self.api.session().replace_token(response.token).await;
        Ok(())
    }

    /// Tell the server, then drop local credentials whatever it said.
    pub async fn logout(&self) {
        if self.api.session().token().await.is_some() {
            if let Err(e) = self
                .api
                .send_raw(ApiRequest::post(auth::LOGOUT))
                .await
            {
                warn!(error = %e, "logout request failed; clearing local session anyway");
            }
        }
        self.api.session().sign_out().await;
    }
}
