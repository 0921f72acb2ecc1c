//! Authentication: register, login, password hashing, access tokens.

mod handlers;
mod password;
mod token;

pub use handlers::{login, register, LoginRequest, RegisterRequest};
pub use password::{hash_password, verify_password};
pub use token::{generate_access_token, ACCESS_TOKEN_BYTES};
