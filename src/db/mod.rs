//! Database layer: pool, schema bootstrap, and the Postgres-backed store.

mod pool;
mod repositories;

pub use pool::{create_pool, init_schema, DbPool};
pub use repositories::PgStore;
