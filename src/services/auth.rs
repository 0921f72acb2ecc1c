//! Credential and session-token model over an injected [`IdentityStore`].

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::auth::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::models::{Account, NewUser, User};
use crate::repositories::IdentityStore;

/// Registers users, checks passwords, and resolves bearer tokens to users.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn IdentityStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn IdentityStore>) -> Self {
        Self { store }
    }

    /// Hash the password and persist a new user. The store decides uniqueness.
    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> AppResult<Account> {
        if username.is_empty() {
            return Err(AppError::Validation("username is required".to_string()));
        }
        if password.is_empty() {
            return Err(AppError::Validation("password is required".to_string()));
        }
        if !storable(username) {
            return Err(AppError::Validation("username contains a NUL character".to_string()));
        }

        let password = password.to_string();
        let password_hash = run_blocking(move || hash_password(&password)).await?;
        let user = self
            .store
            .create_user(NewUser {
                username: username.to_string(),
                password_hash,
            })
            .await?;
        info!(user_id = %user.id, "user registered");
        Ok(user.into())
    }

    /// Unknown user and wrong password fail identically. The token is the one
    /// issued at registration.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> AppResult<Account> {
        if !storable(username) {
            debug!("login with unstorable username");
            return Err(AppError::InvalidCredentials);
        }
        let Some(user) = self.store.find_by_username(username).await? else {
            debug!("login for unknown user");
            return Err(AppError::InvalidCredentials);
        };

        let password = password.to_string();
        let hash = user.password_hash.clone();
        let matches = run_blocking(move || verify_password(&password, &hash)).await?;
        if !matches {
            debug!(user_id = %user.id, "password mismatch");
            return Err(AppError::InvalidCredentials);
        }
        info!(user_id = %user.id, "user logged in");
        Ok(user.into())
    }

    /// Exact-match token lookup.
    pub async fn authenticate(&self, token: &str) -> AppResult<User> {
        if token.is_empty() || !storable(token) {
            return Err(AppError::Unauthenticated);
        }
        self.store
            .find_by_token(token)
            .await?
            .ok_or(AppError::Unauthenticated)
    }
}

/// Postgres TEXT cannot hold NUL; such input can never match a stored value.
fn storable(value: &str) -> bool {
    !value.contains('\0')
}

/// Argon2 is CPU-bound; keep it off the async workers.
async fn run_blocking<T, F>(f: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("blocking task: {}", e)))?
}
