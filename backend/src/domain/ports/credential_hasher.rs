//! Port for one-way password hashing.
//!
//! Hashing is CPU-bound and synchronous. Callers in async code are expected
//! to move it onto a blocking thread.

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Errors raised by credential hashers.
    pub enum CredentialHashError {
        /// Producing a hash failed.
        Hash { message: String } => "password hashing failed: {message}",
        /// A stored hash could not be parsed.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Hash `password` with a fresh salt.
    fn hash(&self, password: &str) -> Result<PasswordHash, CredentialHashError>;

    /// Check `password` against a stored hash.
    ///
    /// A mismatch is `Ok(false)`; errors are reserved for unusable hashes.
    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, CredentialHashError>;
}
