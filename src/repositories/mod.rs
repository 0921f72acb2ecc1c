//! Storage seams: identity and quote stores, with an in-memory implementation.
//!
//! The Postgres implementation lives in [`crate::db::PgStore`].

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{NewQuote, NewUser, Quote, User};

/// Durable storage and lookup of users. Append-only: no update or delete.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Insert a user with a freshly generated id and access token.
    ///
    /// Username uniqueness is enforced here, atomically with the insert;
    /// a taken name yields [`AppError::DuplicateUsername`](crate::AppError::DuplicateUsername).
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Exact match on the stored access token.
    async fn find_by_token(&self, token: &str) -> AppResult<Option<User>>;
}

/// Read access to the quote collection, plus the inserts used for seeding.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// One record chosen uniformly at random, or `None` when the collection is empty.
    async fn sample_one(&self) -> AppResult<Option<Quote>>;

    async fn count(&self) -> AppResult<i64>;

    async fn insert(&self, new_quote: NewQuote) -> AppResult<Quote>;
}
