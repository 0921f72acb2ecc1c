//! Quote records served behind authentication.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Quote {
    pub id: Uuid,
    pub index: i32,
    pub category: String,
    pub quote: String,
    pub image_link: Option<String>,
}

/// Seed file entry.
#[derive(Debug, Clone, Deserialize)]
pub struct NewQuote {
    pub index: i32,
    pub category: String,
    pub quote: String,
    #[serde(default)]
    pub image_link: Option<String>,
}
