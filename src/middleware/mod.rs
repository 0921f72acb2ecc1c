//! Middleware: request authentication extractors.

pub mod auth;

pub use auth::AuthUser;
