//! Password hashing helpers
//!
//! Argon2id hashing for signup and the sample-data seeder, verification
//! for login.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::utils::errors::{HostelError, Result};

/// Hash a plaintext password with Argon2id
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| HostelError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored hash
///
/// A malformed stored hash counts as a failed verification rather than an
/// error surfaced to the login form.
pub fn verify_password(stored_hash: &str, password: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("student123").unwrap();
        assert!(verify_password(&hash, "student123"));
        assert!(!verify_password(&hash, "student124"));
    }

    #[test]
    fn test_malformed_hash_fails_verification() {
        assert!(!verify_password("not-a-phc-string", "student123"));
    }
}
