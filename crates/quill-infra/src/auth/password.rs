//! Password hashing for dashboard accounts.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use quill_core::ports::{AuthError, PasswordService};

/// Argon2id hashing behind the [`PasswordService`] port.
///
/// A mismatched password folds to `Ok(false)`; only a malformed stored hash
/// surfaces as an error.
#[derive(Default)]
pub struct Argon2PasswordService {
    hasher: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let hashed = self
            .hasher
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(hashed.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .hasher
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_round_trip() {
        let service = Argon2PasswordService::new();

        let hash = service.hash("secure_password_123").unwrap();

        assert!(service.verify("secure_password_123", &hash).unwrap());
        assert!(!service.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let service = Argon2PasswordService::new();

        let first = service.hash("same-password").unwrap();
        let second = service.hash("same-password").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let service = Argon2PasswordService::new();

        let result = service.verify("anything", "not-a-phc-string");

        assert!(matches!(result, Err(AuthError::HashingError(_))));
    }
}
