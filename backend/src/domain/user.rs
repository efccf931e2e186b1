//! User data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validation errors raised while constructing user values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Username exceeds the storage limit.
    #[error("username must be at most {max} characters")]
    UsernameTooLong { max: usize },
    /// Stored password hash was blank.
    #[error("password hash must not be empty")]
    EmptyPasswordHash,
}

/// Maximum username length, matching the `users.username` column.
pub const USERNAME_MAX: usize = 64;

/// Account identity key.
///
/// ## Invariants
/// - Trimmed and lower-cased, so `"  Alice "` and `"alice"` are the same user.
/// - Non-empty and at most [`USERNAME_MAX`] characters.
///
/// # Examples
/// ```
/// use stockroom::domain::Username;
///
/// let name = Username::new("  Alice ").unwrap();
/// assert_eq!(name.as_ref(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Normalise and validate a username.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let normalized = raw.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if normalized.chars().count() > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        Ok(Self(normalized))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One-way password hash in PHC string format.
///
/// `Debug` output is redacted so hashes do not end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash produced by a [`CredentialHasher`](super::ports::CredentialHasher).
    pub fn new(encoded: impl Into<String>) -> Result<Self, UserValidationError> {
        let encoded = encoded.into();
        if encoded.trim().is_empty() {
            return Err(UserValidationError::EmptyPasswordHash);
        }
        Ok(Self(encoded))
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Registered account. Users are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: Username,
    password_hash: PasswordHash,
    created_at: DateTime<Utc>,
}

impl User {
    /// Build a user from validated parts.
    #[must_use]
    pub fn new(username: Username, password_hash: PasswordHash, created_at: DateTime<Utc>) -> Self {
        Self {
            username,
            password_hash,
            created_at,
        }
    }

    /// Identity key.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Stored password hash.
    #[must_use]
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Registration time.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
