//! User records and the public account view returned to clients.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted user. `password_hash` is a PHC string and never leaves the server.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub access_token: String,
    pub created_at: DateTime<Utc>,
}

/// Input to `IdentityStore::create_user`. The store assigns id and token.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// What register and login hand back: no hash, no plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub username: String,
    pub id: Uuid,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

impl From<User> for Account {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
            access_token: user.access_token,
        }
    }
}
