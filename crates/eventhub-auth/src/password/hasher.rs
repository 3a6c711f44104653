//! Password hashing with Argon2id.

use argon2::password_hash::{PasswordHash, PasswordVerifier, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher as _};

use eventhub_core::error::AppError;

/// Hashes and verifies account passwords. Every hash gets its own
/// random salt; the salt and parameters travel inside the PHC string.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a freshly generated salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Could not hash password: {e}")))
    }

    /// Check a plaintext password against a stored PHC hash string.
    ///
    /// A mismatch is `Ok(false)`; errors are reserved for malformed
    /// stored hashes.
    pub fn verify_password(&self, password: &str, stored: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(stored)
            .map_err(|e| AppError::internal(format!("Stored password hash is malformed: {e}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!("Password check failed: {e}"))),
        }
    }
}
