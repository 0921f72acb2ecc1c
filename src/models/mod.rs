//! Data models for accounts and quotes.

pub mod quote;
pub mod user;

pub use quote::*;
pub use user::*;
