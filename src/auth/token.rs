//! Opaque bearer tokens.

use rand::{rngs::OsRng, RngCore};

/// Raw token length; the hex form is twice this.
pub const ACCESS_TOKEN_BYTES: usize = 128;

/// Fresh access token from the OS CSPRNG, lowercase hex encoded.
pub fn generate_access_token() -> String {
    let mut bytes = [0u8; ACCESS_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_fixed_length_hex() {
        let token = generate_access_token();
        assert_eq!(token.len(), ACCESS_TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn tokens_differ() {
        assert_ne!(generate_access_token(), generate_access_token());
    }
}
