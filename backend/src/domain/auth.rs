//! Authentication primitives.
//!
//! Inbound adapters build [`Credentials`] from raw form input before calling
//! the account service, so blank fields never reach a repository.

use std::fmt;

use zeroize::Zeroizing;

use super::user::{UserValidationError, Username};

/// Errors raised when credential input is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsValidationError {
    /// Username was rejected by [`Username::new`].
    #[error(transparent)]
    Username(#[from] UserValidationError),
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated username/password pair used for both registration and login.
///
/// ## Invariants
/// - `username` is normalised (trimmed, lower-cased).
/// - `password` is non-empty and kept verbatim, whitespace included.
///
/// # Examples
/// ```
/// use stockroom::domain::Credentials;
///
/// let creds = Credentials::try_from_parts("Alice", "pw1").unwrap();
/// assert_eq!(creds.username().as_ref(), "alice");
/// assert_eq!(creds.password(), "pw1");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: Username,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials from raw inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        let username = Username::new(username)?;
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }
        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Normalised username.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Password exactly as supplied.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"..")
            .finish()
    }
}
