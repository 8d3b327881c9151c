use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

use crate::errors::InternalError;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 of a refresh token, hex encoded
pub fn hmac_sha256_token(key: &str, token: &str) -> Result<String, InternalError> {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| InternalError::crypto("hmac_sha256", e.to_string()))?;
    mac.update(token.as_bytes());
    Ok(format!("{:x}", mac.finalize().into_bytes()))
}

/// Generate a random 20-character password for the bootstrap admin
///
/// Draws from upper and lower case letters, digits and symbols.
pub fn generate_secure_password() -> String {
    const PASSWORD_LENGTH: usize = 20;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789\
                             !@#$%^&*()_+-=[]{}|;:,.<>?";

    let mut rng = rand::rng();
    (0..PASSWORD_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_is_deterministic_hex() {
        let first = hmac_sha256_token("secreto", "token").unwrap();
        let second = hmac_sha256_token("secreto", "token").unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hmac_depends_on_key() {
        assert_ne!(
            hmac_sha256_token("clave-uno", "token").unwrap(),
            hmac_sha256_token("clave-dos", "token").unwrap()
        );
    }

    #[test]
    fn test_generate_secure_password() {
        let password = generate_secure_password();
        assert_eq!(password.len(), 20);
        assert!(password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "!@#$%^&*()_+-=[]{}|;:,.<>?".contains(c)));
        assert_ne!(password, generate_secure_password());
    }
}
