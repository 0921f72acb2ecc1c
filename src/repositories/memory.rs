//! In-process store used by tests.

use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{IdentityStore, QuoteStore};
use crate::auth::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::models::{NewQuote, NewUser, Quote, User};

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    quotes: Vec<Quote>,
}

/// Vec-backed store. All mutation happens under a single write lock, so the
/// username check and the insert cannot interleave with another registration.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        let mut inner = self.inner.write().await;
        if inner.users.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::DuplicateUsername);
        }
        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            password_hash: new_user.password_hash,
            access_token: generate_access_token(),
            created_at: Utc::now(),
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.access_token == token).cloned())
    }
}

#[async_trait]
impl QuoteStore for MemoryStore {
    async fn sample_one(&self) -> AppResult<Option<Quote>> {
        let inner = self.inner.read().await;
        Ok(inner.quotes.choose(&mut rand::thread_rng()).cloned())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.inner.read().await.quotes.len() as i64)
    }

    async fn insert(&self, new_quote: NewQuote) -> AppResult<Quote> {
        let quote = Quote {
            id: Uuid::new_v4(),
            index: new_quote.index,
            category: new_quote.category,
            quote: new_quote.quote,
            image_link: new_quote.image_link,
        };
        self.inner.write().await.quotes.push(quote.clone());
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            username: name.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn create_user_rejects_taken_username() {
        let store = MemoryStore::new();
        store.create_user(new_user("alice")).await.unwrap();
        let err = store.create_user(new_user("alice")).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateUsername));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn concurrent_registrations_keep_one_user() {
        let store = MemoryStore::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.create_user(new_user("bob")).await })
            })
            .collect();
        let mut ok = 0;
        for h in handles {
            if h.await.unwrap().is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn lookups_by_username_and_token() {
        let store = MemoryStore::new();
        let user = store.create_user(new_user("carol")).await.unwrap();

        let by_name = store.find_by_username("carol").await.unwrap().unwrap();
        assert_eq!(by_name.id, user.id);
        let by_token = store.find_by_token(&user.access_token).await.unwrap().unwrap();
        assert_eq!(by_token.id, user.id);

        assert!(store.find_by_username("dave").await.unwrap().is_none());
        assert!(store.find_by_token("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn sample_one_on_empty_and_seeded() {
        let store = MemoryStore::new();
        assert!(store.sample_one().await.unwrap().is_none());

        store
            .insert(NewQuote {
                index: 1,
                category: "wisdom".to_string(),
                quote: "Know thyself.".to_string(),
                image_link: None,
            })
            .await
            .unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
        let quote = store.sample_one().await.unwrap().unwrap();
        assert_eq!(quote.quote, "Know thyself.");
    }
}
