//! Postgres implementations of the identity and quote stores.

use async_trait::async_trait;
use uuid::Uuid;

use super::DbPool;
use crate::auth::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::models::{NewQuote, NewUser, Quote, User};
use crate::repositories::{IdentityStore, QuoteStore};

const USERNAME_CONSTRAINT: &str = "users_username_key";

const USER_COLUMNS: &str = "id, username, password_hash, access_token, created_at";
const QUOTE_COLUMNS: &str = r#"id, quote_index AS "index", category, quote, image_link"#;

/// Store backed by a shared `PgPool`; cheap to clone.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() && db_err.constraint() == Some(USERNAME_CONSTRAINT) {
            return AppError::DuplicateUsername;
        }
    }
    AppError::Storage(err)
}

#[async_trait]
impl IdentityStore for PgStore {
    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        let sql = format!(
            "INSERT INTO users (id, username, password_hash, access_token) \
             VALUES ($1, $2, $3, $4) RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(Uuid::new_v4())
            .bind(&new_user.username)
            .bind(&new_user.password_hash)
            .bind(generate_access_token())
            .fetch_one(&self.pool)
            .await
            .map_err(map_insert_error)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE access_token = $1");
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl QuoteStore for PgStore {
    async fn sample_one(&self) -> AppResult<Option<Quote>> {
        let sql = format!("SELECT {QUOTE_COLUMNS} FROM quotes ORDER BY random() LIMIT 1");
        let row = sqlx::query_as::<_, Quote>(&sql)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn count(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*)::bigint FROM quotes")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn insert(&self, new_quote: NewQuote) -> AppResult<Quote> {
        let sql = format!(
            "INSERT INTO quotes (id, quote_index, category, quote, image_link) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {QUOTE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Quote>(&sql)
            .bind(Uuid::new_v4())
            .bind(new_quote.index)
            .bind(&new_quote.category)
            .bind(&new_quote.quote)
            .bind(&new_quote.image_link)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }
}
