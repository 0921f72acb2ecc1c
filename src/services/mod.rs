//! Business logic: account registration/login/authentication and quote selection.

pub mod auth;
pub mod quotes;

pub use auth::AuthService;
pub use quotes::QuoteService;
