/**
 * Session State
 *
 * The signed-in user and bearer token, shared by reference (`Arc<Session>`)
 * between the API client and whatever front end drives it. All mutation
 * goes through the methods below; readers get cloned snapshots.
 *
 * State machine:
 *
 *   Loading --(stored token resolves to a user)--> Authenticated
 *   Loading --(no token / token rejected)--------> Anonymous
 *   Authenticated --(logout, or 401 on the current token)--> Anonymous
 *   Anonymous --(login / register)---------------> Authenticated
 */

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::client::token_store::TokenStore;
use crate::shared::models::{AuthResponse, User};

/// Authentication state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Stored token not checked yet
    Loading,
    Authenticated(User),
    Anonymous,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct SessionInner {
    state: SessionState,
    token: Option<String>,
}

pub struct Session {
    inner: RwLock<SessionInner>,
    store: Box<dyn TokenStore>,
}

impl Session {
    /// Start in `Loading` with whatever token the store holds.
    pub fn new(store: Box<dyn TokenStore>) -> Self {
        let token = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "could not read stored token");
            None
        });
        Self {
            inner: RwLock::new(SessionInner {
                state: SessionState::Loading,
                token,
            }),
            store,
        }
    }

    pub async fn state(&self) -> SessionState {
        self.inner.read().await.state.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.token.clone()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.inner.read().await.state.user().cloned()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.state.is_authenticated()
    }

    /// Adopt the credentials from a login or register response.
    pub async fn sign_in(&self, auth: AuthResponse) -> User {
        let mut inner = self.inner.write().await;
        self.persist(&auth.token);
        inner.token = Some(auth.token);
        inner.state = SessionState::Authenticated(auth.user.clone());
        info!(email = %auth.user.email, "signed in");
        auth.user
    }

    /// Swap in a refreshed token without touching the user.
    pub async fn replace_token(&self, token: String) {
        let mut inner = self.inner.write().await;
        self.persist(&token);
        inner.token = Some(token);
    }

    /// Finish the start-up check. `None` means the stored token was not
    /// usable and is discarded.
    pub async fn resolve(&self, user: Option<User>) -> SessionState {
        let mut inner = self.inner.write().await;
        inner.state = match user {
            Some(user) => SessionState::Authenticated(user),
            None => {
                if inner.token.take().is_some() {
                    self.forget();
                }
                SessionState::Anonymous
            }
        };
        inner.state.clone()
    }

    /// Give up on the start-up check without discarding the token, e.g. when
    /// the server could not be reached at all.
    pub async fn abandon_restore(&self) -> SessionState {
        let mut inner = self.inner.write().await;
        if inner.state == SessionState::Loading {
            inner.state = SessionState::Anonymous;
        }
        inner.state.clone()
    }

    /// Explicit logout
    pub async fn sign_out(&self) {
        let mut inner = self.inner.write().await;
        inner.token = None;
        inner.state = SessionState::Anonymous;
        self.forget();
        info!("signed out");
    }

    /// The server answered 401 to a request sent with `rejected`.
    ///
    /// Only that token is dropped: if the session has signed in or refreshed
    /// since the request went out, the newer token stays. Returns whether
    /// the session was cleared.
    pub async fn expire(&self, rejected: Option<&str>) -> bool {
        let mut inner = self.inner.write().await;
        if rejected.is_none() || inner.token.as_deref() != rejected {
            debug!("401 for a token that is no longer current; keeping session");
            return false;
        }
        inner.token = None;
        inner.state = SessionState::Anonymous;
        self.forget();
        warn!("session expired; sign in again");
        true
    }

    fn persist(&self, token: &str) {
        if let Err(e) = self.store.save(token) {
            warn!(error = %e, "could not persist token; it will be kept in memory only");
        }
    }

    fn forget(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "could not remove stored token");
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
