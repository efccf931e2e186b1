//! Session configuration parsing and validation.
//!
//! Settings come from environment variables read through [`mockable::Env`]
//! so every branch can be tested without touching the process environment.
//! Debug builds fall back to defaults with a warning; release builds fail.

use std::path::PathBuf;

use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite, time::Duration};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroizing;

pub mod fingerprint;
mod parsing;

use super::session::SESSION_COOKIE_NAME;
use parsing::{Toggle, lenient, same_site_value};

const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
/// Release builds refuse keys shorter than this.
pub const SESSION_KEY_MIN_LEN: usize = 64;
/// `Key::derive_from` needs at least this much material.
const KEY_DERIVE_MIN_LEN: usize = 32;
const SECRET_ENV: &str = "SESSION_SECRET";
const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const SAMESITE_ENV: &str = "SESSION_SAMESITE";
const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";

/// Build mode for session configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate defaults and emit warnings for missing toggles.
    Debug,
    /// Release builds require explicit, valid session toggles.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Where the session key came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeySource {
    /// `SESSION_SECRET`.
    Inline,
    /// A key file on disk.
    File(PathBuf),
    /// Randomly generated for this process only.
    Ephemeral,
}

impl std::fmt::Display for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inline => f.write_str(SECRET_ENV),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Ephemeral => f.write_str("ephemeral"),
        }
    }
}

/// Validated session cookie settings.
#[derive(Clone)]
pub struct SessionSettings {
    /// Signing and encryption key for cookie sessions.
    pub key: Key,
    /// Origin of [`Self::key`], for startup logging.
    pub key_source: KeySource,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
    /// Configured `SameSite` policy for session cookies.
    pub same_site: SameSite,
}

impl SessionSettings {
    /// Cookie-backed session middleware: private (encrypted) content,
    /// `HttpOnly`, a two hour persistent lifetime.
    #[must_use]
    pub fn middleware(&self) -> SessionMiddleware<CookieSessionStore> {
        SessionMiddleware::builder(CookieSessionStore::default(), self.key.clone())
            .cookie_name(SESSION_COOKIE_NAME.to_owned())
            .cookie_path("/".to_owned())
            .cookie_secure(self.cookie_secure)
            .cookie_http_only(true)
            .cookie_content_security(CookieContentSecurity::Private)
            .cookie_same_site(self.same_site)
            .session_lifecycle(PersistentSession::default().session_ttl(Duration::hours(2)))
            .build()
    }
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Reading the session key file failed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configured key material is too short.
    #[error("session key from {source_name} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        source_name: String,
        length: usize,
        min_len: usize,
    },
    /// `SameSite=None` requires a secure cookie setting in release builds.
    #[error("SESSION_SAMESITE=None requires SESSION_COOKIE_SECURE=1")]
    InsecureSameSiteNone,
    /// Release builds must not allow ephemeral session keys.
    #[error("SESSION_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// Build session settings from environment variables and build mode.
///
/// # Examples
///
/// ```rust
/// use mockable::MockEnv;
/// use stockroom::inbound::http::session_config::{BuildMode, session_settings_from_env};
///
/// let secret = "s".repeat(64);
/// let mut env = MockEnv::new();
/// env.expect_string().returning(move |name| match name {
///     "SESSION_SECRET" => Some(secret.clone()),
///     "SESSION_COOKIE_SECURE" => Some("1".to_string()),
///     "SESSION_SAMESITE" => Some("Strict".to_string()),
///     "SESSION_ALLOW_EPHEMERAL" => Some("0".to_string()),
///     _ => None,
/// });
///
/// let settings = session_settings_from_env(&env, BuildMode::Release).unwrap();
/// assert!(settings.cookie_secure);
/// ```
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let cookie_secure = Toggle {
        name: COOKIE_SECURE_ENV,
        debug_default: true,
    }
    .read(env, mode)?;
    let same_site = same_site_from_env(env, mode, cookie_secure)?;
    let allow_ephemeral = Toggle {
        name: ALLOW_EPHEMERAL_ENV,
        debug_default: false,
    }
    .read(env, mode)?;
    if allow_ephemeral && !mode.is_debug() {
        return Err(SessionConfigError::EphemeralNotAllowed);
    }
    let (key, key_source) = session_key_from_env(env, mode, allow_ephemeral)?;

    Ok(SessionSettings {
        key,
        key_source,
        cookie_secure,
        same_site,
    })
}

fn same_site_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
    cookie_secure: bool,
) -> Result<SameSite, SessionConfigError> {
    let default_same_site = if mode.is_debug() {
        SameSite::Lax
    } else {
        SameSite::Strict
    };

    match env.string(SAMESITE_ENV) {
        Some(value) => same_site_value(&value, mode, cookie_secure, default_same_site),
        None => lenient(
            mode,
            default_same_site,
            SessionConfigError::MissingEnv { name: SAMESITE_ENV },
            || warn!("SESSION_SAMESITE not set; using default"),
        ),
    }
}

fn session_key_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<(Key, KeySource), SessionConfigError> {
    if let Some(secret) = env.string(SECRET_ENV).filter(|secret| !secret.is_empty()) {
        let bytes = Zeroizing::new(secret.into_bytes());
        return derive_key(&bytes, KeySource::Inline, mode);
    }

    let path = PathBuf::from(
        env.string(KEY_FILE_ENV)
            .unwrap_or_else(|| SESSION_KEY_DEFAULT_PATH.to_string()),
    );
    match std::fs::read(&path) {
        Ok(bytes) => derive_key(&Zeroizing::new(bytes), KeySource::File(path), mode),
        Err(error) if mode.is_debug() || allow_ephemeral => {
            warn!(
                path = %path.display(),
                error = %error,
                "using temporary session key (dev only)"
            );
            Ok((Key::generate(), KeySource::Ephemeral))
        }
        Err(error) => Err(SessionConfigError::KeyRead {
            path,
            source: error,
        }),
    }
}

fn derive_key(
    bytes: &[u8],
    source: KeySource,
    mode: BuildMode,
) -> Result<(Key, KeySource), SessionConfigError> {
    let length = bytes.len();
    let min_len = if mode.is_debug() {
        KEY_DERIVE_MIN_LEN
    } else {
        SESSION_KEY_MIN_LEN
    };
    if length < min_len {
        return lenient(
            mode,
            (Key::generate(), KeySource::Ephemeral),
            SessionConfigError::KeyTooShort {
                source_name: source.to_string(),
                length,
                min_len,
            },
            || warn!(%source, length, "session key too short; using temporary key"),
        );
    }
    if length < SESSION_KEY_MIN_LEN {
        warn!(%source, length, "session key shorter than release minimum");
    }
    Ok((Key::derive_from(bytes), source))
}
