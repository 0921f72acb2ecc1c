//! Random quote selection and startup seeding.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::{AppError, AppResult, NO_QUOTES_MESSAGE};
use crate::models::{NewQuote, Quote};
use crate::repositories::QuoteStore;

#[derive(Clone)]
pub struct QuoteService {
    store: Arc<dyn QuoteStore>,
}

impl QuoteService {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }

    pub async fn random_quote(&self) -> AppResult<Quote> {
        self.store
            .sample_one()
            .await?
            .ok_or_else(|| AppError::NotFound(NO_QUOTES_MESSAGE.to_string()))
    }

    /// Insert `quotes` only when the collection is empty. Returns the number inserted.
    pub async fn seed(&self, quotes: Vec<NewQuote>) -> AppResult<usize> {
        if self.store.count().await? > 0 {
            return Ok(0);
        }
        let total = quotes.len();
        for quote in quotes {
            self.store.insert(quote).await?;
        }
        info!(count = total, "seeded quotes");
        Ok(total)
    }

    /// Load a JSON array of quotes from `path` and [`seed`](Self::seed) them.
    pub async fn seed_from_file(&self, path: &Path) -> AppResult<usize> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Config(format!("read {}: {}", path.display(), e)))?;
        let quotes: Vec<NewQuote> = serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("parse {}: {}", path.display(), e)))?;
        self.seed(quotes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryStore;

    fn quote(index: i32, text: &str) -> NewQuote {
        NewQuote {
            index,
            category: "life".to_string(),
            quote: text.to_string(),
            image_link: Some(format!("https://img.example/{index}.jpg")),
        }
    }

    #[tokio::test]
    async fn empty_store_is_not_found() {
        let service = QuoteService::new(Arc::new(MemoryStore::new()));
        let err = service.random_quote().await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "No quotes found.");
    }

    #[tokio::test]
    async fn seed_runs_once() {
        let store = MemoryStore::new();
        let service = QuoteService::new(Arc::new(store.clone()));

        let inserted = service.seed(vec![quote(1, "a"), quote(2, "b")]).await.unwrap();
        assert_eq!(inserted, 2);
        let inserted = service.seed(vec![quote(3, "c")]).await.unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(store.count().await.unwrap(), 2);

        let picked = service.random_quote().await.unwrap();
        assert!(picked.quote == "a" || picked.quote == "b");
    }

    #[tokio::test]
    async fn seed_from_missing_file_is_config_error() {
        let service = QuoteService::new(Arc::new(MemoryStore::new()));
        let err = service
            .seed_from_file(Path::new("/definitely/not/here.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
