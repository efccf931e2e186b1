//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! [`SessionContext`] wraps the Actix session so handlers deal only with the
//! signed-in [`Username`] and the flash queue.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use super::flash::Flash;
use crate::domain::{Error, Username};

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "session";
pub(crate) const USERNAME_KEY: &str = "username";
pub(crate) const FLASHES_KEY: &str = "_flashes";
/// Undelivered flashes kept per session; older ones are dropped first.
pub const MAX_QUEUED_FLASHES: usize = 5;

/// Request-scoped view of the caller's session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Bind the session to `username`, rotating the cookie first.
    pub fn persist_user(&self, username: &Username) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USERNAME_KEY, username.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// The signed-in user, if any. Values that no longer validate are ignored.
    pub fn username(&self) -> Result<Option<Username>, Error> {
        let raw = self
            .0
            .get::<String>(USERNAME_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        match raw.map(Username::new) {
            Some(Ok(username)) => Ok(Some(username)),
            Some(Err(error)) => {
                warn!(%error, "invalid username in session cookie");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Require a signed-in user or fail with `Unauthorized`.
    pub fn require_user(&self) -> Result<Username, Error> {
        self.username()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop every session value and issue a fresh cookie.
    ///
    /// The session stays writable so a flash can follow the logout.
    pub fn end_session(&self) {
        self.0.clear();
        self.0.renew();
    }

    /// Queue a flash for the next rendered page, keeping at most
    /// [`MAX_QUEUED_FLASHES`] of the newest entries.
    pub fn push_flash(&self, flash: Flash) -> Result<(), Error> {
        let mut queue = self.read_flashes(false);
        queue.push(flash);
        let overflow = queue.len().saturating_sub(MAX_QUEUED_FLASHES);
        queue.drain(..overflow);
        self.0
            .insert(FLASHES_KEY, queue)
            .map_err(|error| Error::internal(format!("failed to queue flash: {error}")))
    }

    /// Remove and return queued flashes, oldest first.
    pub fn take_flashes(&self) -> Vec<Flash> {
        self.read_flashes(true)
    }

    fn read_flashes(&self, remove: bool) -> Vec<Flash> {
        let result = if remove {
            self.0.remove_as::<Vec<Flash>>(FLASHES_KEY).transpose()
        } else {
            self.0
                .get::<Vec<Flash>>(FLASHES_KEY)
                .map_err(|error| error.to_string())
        };
        match result {
            Ok(queue) => queue.unwrap_or_default(),
            Err(error) => {
                warn!(%error, "discarding unreadable flash queue");
                Vec::new()
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
