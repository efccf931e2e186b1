//! Driving port for registration and login.
//!
//! Inbound adapters call this port to manage accounts without importing the
//! hasher or the user store, so HTTP tests can substitute a double.

use async_trait::async_trait;

use crate::domain::{AuthError, Credentials, User};

/// Domain use-case port for account management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create an account. Fails with [`AuthError::DuplicateUser`] when the
    /// username is taken.
    async fn register(&self, credentials: &Credentials) -> Result<User, AuthError>;

    /// Authenticate an existing account. Unknown users and wrong passwords
    /// both yield [`AuthError::InvalidCredentials`].
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError>;
}
