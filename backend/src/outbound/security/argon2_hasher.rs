//! Argon2id implementation of the `CredentialHasher` port.

use argon2::password_hash::{self, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHasher, PasswordVerifier, Version};

use crate::domain::PasswordHash;
use crate::domain::ports::{CredentialHashError, CredentialHasher};

/// Hashes passwords as PHC strings with a random 16 byte salt.
///
/// # Examples
/// ```
/// use stockroom::domain::ports::CredentialHasher;
/// use stockroom::outbound::security::Argon2PasswordHasher;
///
/// let hasher = Argon2PasswordHasher::default();
/// let hash = hasher.hash("pw1").unwrap();
/// assert!(hash.as_ref().starts_with("$argon2id$"));
/// assert!(hasher.verify("pw1", &hash).unwrap());
/// assert!(!hasher.verify("pw2", &hash).unwrap());
/// ```
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Hasher with explicit cost parameters, e.g. cheap ones for tests.
    #[must_use]
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }
}

impl CredentialHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, CredentialHashError> {
        let salt_bytes: [u8; 16] = rand::random();
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|err| CredentialHashError::hash(err.to_string()))?;
        let phc = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| CredentialHashError::hash(err.to_string()))?
            .to_string();
        PasswordHash::new(phc).map_err(|err| CredentialHashError::hash(err.to_string()))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, CredentialHashError> {
        let parsed = password_hash::PasswordHash::new(hash.as_ref())
            .map_err(|err| CredentialHashError::malformed_hash(err.to_string()))?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(CredentialHashError::malformed_hash(err.to_string())),
        }
    }
}
