//! PIN hashing. PINs are never stored or compared in plain text.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::core::error::{AppError, Result};

/// Hash a PIN with a fresh random salt.
pub fn hash_pin(pin: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(pin.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash PIN: {}", e)))?;
    Ok(hash.to_string())
}

/// Constant-shape verification: any malformed stored hash verifies false
/// rather than erroring, so callers cannot tell the failure modes apart.
pub fn verify_pin(pin: &str, pin_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(pin_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(pin.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_pin("4711").unwrap();
        assert!(verify_pin("4711", &hash));
        assert!(!verify_pin("4712", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_pin("4711").unwrap();
        let b = hash_pin("4711").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_verifies_false() {
        assert!(!verify_pin("4711", "not-a-phc-string"));
    }
}
