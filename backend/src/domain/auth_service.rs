//! Account registration and login.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    AccountService, CredentialHashError, CredentialHasher, UserPersistenceError, UserRepository,
};
use crate::domain::{Credentials, CredentialsValidationError, Error, PasswordHash, User};

/// Failures surfaced by [`AccountService`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The username is already registered.
    #[error("Username already exists")]
    DuplicateUser { username: String },
    /// Unknown username or wrong password; deliberately indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,
    /// Username or password failed validation.
    #[error(transparent)]
    InvalidInput(#[from] CredentialsValidationError),
    /// The user store failed.
    #[error(transparent)]
    Persistence(#[from] UserPersistenceError),
    /// The password hasher failed.
    #[error(transparent)]
    Hashing(#[from] CredentialHashError),
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::DuplicateUser { .. } => Error::conflict(err.to_string()),
            AuthError::InvalidCredentials => Error::unauthorized(err.to_string()),
            AuthError::InvalidInput(inner) => Error::invalid_request(inner.to_string()),
            AuthError::Persistence(UserPersistenceError::Connection { message }) => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            AuthError::Persistence(inner) => Error::internal(inner.to_string()),
            AuthError::Hashing(inner) => Error::internal(inner.to_string()),
        }
    }
}

/// Account service backed by a user repository and a credential hasher.
#[derive(Clone)]
pub struct AuthService<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
    clock: Arc<dyn Clock>,
}

impl<U, H> AuthService<U, H> {
    /// Create a new service.
    pub fn new(users: Arc<U>, hasher: Arc<H>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            hasher,
            clock,
        }
    }
}

impl<U, H> AuthService<U, H>
where
    U: UserRepository,
    H: CredentialHasher + 'static,
{
    async fn hash_password(&self, password: &str) -> Result<PasswordHash, AuthError> {
        let hasher = Arc::clone(&self.hasher);
        let password = zeroize::Zeroizing::new(password.to_owned());
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|err| CredentialHashError::hash(format!("hashing task failed: {err}")))?
            .map_err(AuthError::from)
    }

    async fn verify_password(&self, password: &str, hash: PasswordHash) -> Result<bool, AuthError> {
        let hasher = Arc::clone(&self.hasher);
        let password = zeroize::Zeroizing::new(password.to_owned());
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|err| CredentialHashError::hash(format!("verification task failed: {err}")))?
            .map_err(AuthError::from)
    }
}

#[async_trait]
impl<U, H> AccountService for AuthService<U, H>
where
    U: UserRepository,
    H: CredentialHasher + 'static,
{
    async fn register(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let username = credentials.username();
        if self.users.find_by_username(username).await?.is_some() {
            debug!(%username, "registration rejected: username taken");
            return Err(AuthError::DuplicateUser {
                username: username.to_string(),
            });
        }

        let hash = self.hash_password(credentials.password()).await?;
        let user = User::new(username.clone(), hash, self.clock.utc());
        match self.users.insert(&user).await {
            Ok(()) => {
                info!(%username, "user registered");
                Ok(user)
            }
            Err(UserPersistenceError::Duplicate { username }) => {
                Err(AuthError::DuplicateUser { username })
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let username = credentials.username();
        let Some(user) = self.users.find_by_username(username).await? else {
            debug!(%username, "login rejected: unknown user");
            return Err(AuthError::InvalidCredentials);
        };

        if self
            .verify_password(credentials.password(), user.password_hash().clone())
            .await?
        {
            info!(%username, "user logged in");
            Ok(user)
        } else {
            debug!(%username, "login rejected: password mismatch");
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockCredentialHasher, MockUserRepository};
    use mockable::DefaultClock;
    use rstest::rstest;

    fn creds(username: &str, password: &str) -> Credentials {
        Credentials::try_from_parts(username, password).expect("valid credentials")
    }

    fn stored_user(username: &str) -> User {
        let credentials = creds(username, "ignored");
        User::new(
            credentials.username().clone(),
            PasswordHash::new(format!("hashed:{username}")).expect("non-empty hash"),
            chrono::Utc::now(),
        )
    }

    fn plaintext_hasher() -> MockCredentialHasher {
        let mut hasher = MockCredentialHasher::new();
        hasher
            .expect_hash()
            .returning(|pw| Ok(PasswordHash::new(format!("hashed:{pw}")).expect("hash")));
        hasher
            .expect_verify()
            .returning(|pw, hash| Ok(hash.as_ref() == format!("hashed:{pw}")));
        hasher
    }

    fn service(
        users: MockUserRepository,
        hasher: MockCredentialHasher,
    ) -> AuthService<MockUserRepository, MockCredentialHasher> {
        AuthService::new(Arc::new(users), Arc::new(hasher), Arc::new(DefaultClock))
    }

    #[tokio::test]
    async fn register_stores_hashed_password() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        users
            .expect_insert()
            .withf(|user| {
                user.username().as_ref() == "alice" && user.password_hash().as_ref() == "hashed:pw1"
            })
            .times(1)
            .returning(|_| Ok(()));

        let user = service(users, plaintext_hasher())
            .register(&creds("Alice", "pw1"))
            .await
            .expect("registration succeeds");
        assert_eq!(user.username().as_ref(), "alice");
    }

    #[tokio::test]
    async fn register_rejects_existing_username() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|name| Ok(Some(stored_user(name.as_ref()))));
        users.expect_insert().never();

        let err = service(users, plaintext_hasher())
            .register(&creds("alice", "pw2"))
            .await
            .expect_err("duplicate must fail");
        assert_eq!(
            err,
            AuthError::DuplicateUser {
                username: "alice".into()
            }
        );
    }

    #[tokio::test]
    async fn register_maps_insert_race_to_duplicate() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        users
            .expect_insert()
            .returning(|user| Err(UserPersistenceError::duplicate(user.username().as_ref())));

        let err = service(users, plaintext_hasher())
            .register(&creds("alice", "pw1"))
            .await
            .expect_err("race loser must fail");
        assert!(matches!(err, AuthError::DuplicateUser { .. }));
    }

    #[rstest]
    #[case("pw1", true)]
    #[case("wrong", false)]
    #[tokio::test]
    async fn login_checks_password(#[case] password: &str, #[case] ok: bool) {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|name| {
            Ok(Some(User::new(
                name.clone(),
                PasswordHash::new("hashed:pw1").expect("hash"),
                chrono::Utc::now(),
            )))
        });

        let result = service(users, plaintext_hasher())
            .login(&creds("alice", password))
            .await;
        match (ok, result) {
            (true, Ok(user)) => assert_eq!(user.username().as_ref(), "alice"),
            (false, Err(err)) => assert_eq!(err, AuthError::InvalidCredentials),
            (expected, other) => panic!("expected success={expected}, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_rejects_unknown_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        let mut hasher = MockCredentialHasher::new();
        hasher.expect_verify().never();

        let err = service(users, hasher)
            .login(&creds("ghost", "pw"))
            .await
            .expect_err("unknown user must fail");
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[rstest]
    #[case(
        AuthError::DuplicateUser { username: "alice".into() },
        ErrorCode::Conflict
    )]
    #[case(AuthError::InvalidCredentials, ErrorCode::Unauthorized)]
    #[case(
        AuthError::InvalidInput(CredentialsValidationError::EmptyPassword),
        ErrorCode::InvalidRequest
    )]
    #[case(
        AuthError::Persistence(UserPersistenceError::connection("refused")),
        ErrorCode::ServiceUnavailable
    )]
    #[case(
        AuthError::Persistence(UserPersistenceError::query("syntax")),
        ErrorCode::InternalError
    )]
    #[case(
        AuthError::Hashing(CredentialHashError::malformed_hash("bad")),
        ErrorCode::InternalError
    )]
    fn auth_errors_map_to_domain_codes(#[case] err: AuthError, #[case] expected: ErrorCode) {
        assert_eq!(Error::from(err).code(), expected);
    }
}
