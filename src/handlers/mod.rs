//! HTTP request handlers.

pub mod http;
pub mod secret;

pub use http::*;
pub use secret::*;
