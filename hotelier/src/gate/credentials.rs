//! Argon2id credential hashing and verification.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::{Error, Result};

/// Hashes and verifies user credentials.
///
/// Hashes are PHC strings carrying their own salt and parameters.
///
/// # Examples
///
/// ```
/// use hotelier::gate::CredentialHasher;
///
/// let hasher = CredentialHasher::new();
/// let hash = hasher.hash("s3cret").unwrap();
/// assert!(hasher.verify("s3cret", &hash).unwrap());
/// assert!(!hasher.verify("guess", &hash).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialHasher;

impl CredentialHasher {
    /// Creates a hasher with the default Argon2id parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Hashes a credential with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the credential is empty or cannot be hashed.
    pub fn hash(&self, credential: &str) -> Result<String> {
        if credential.is_empty() {
            return Err(Error::InvalidInput {
                field: "password".into(),
                message: "must not be empty".into(),
            });
        }
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(credential.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::InvalidInput {
                field: "password".into(),
                message: format!("cannot be hashed: {e}"),
            })
    }

    /// Checks a credential against a stored hash.
    ///
    /// A malformed stored hash never matches.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if verification fails for a reason other than
    /// a mismatch.
    pub fn verify(&self, credential: &str, stored_hash: &str) -> Result<bool> {
        let Ok(parsed) = PasswordHash::new(stored_hash) else {
            return Ok(false);
        };
        match Argon2::default().verify_password(credential.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(Error::InvalidInput {
                field: "password".into(),
                message: format!("cannot be verified: {e}"),
            }),
        }
    }
}
