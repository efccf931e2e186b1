//! Environment lookups for session toggles.

use actix_web::cookie::SameSite;
use mockable::Env;
use tracing::warn;

use super::{BuildMode, SAMESITE_ENV, SessionConfigError};

const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";

/// A boolean environment toggle and the value debug builds fall back to.
#[derive(Clone, Copy)]
pub(super) struct Toggle {
    pub(super) name: &'static str,
    pub(super) debug_default: bool,
}

impl Toggle {
    /// Read the toggle. Missing or unparseable values are fatal in release.
    pub(super) fn read<E: Env>(self, env: &E, mode: BuildMode) -> Result<bool, SessionConfigError> {
        let Some(raw) = env.string(self.name) else {
            return lenient(
                mode,
                self.debug_default,
                SessionConfigError::MissingEnv { name: self.name },
                || warn!(toggle = self.name, fallback = self.debug_default, "toggle not set"),
            );
        };
        match parse_bool(&raw) {
            Some(flag) => Ok(flag),
            None => lenient(
                mode,
                self.debug_default,
                SessionConfigError::InvalidEnv {
                    name: self.name,
                    value: raw.clone(),
                    expected: BOOL_EXPECTED,
                },
                || {
                    warn!(
                        toggle = self.name,
                        value = %raw,
                        fallback = self.debug_default,
                        "toggle not recognised"
                    );
                },
            ),
        }
    }
}

/// In debug builds log through `warning` and return `fallback`; in release
/// builds return `error`.
pub(super) fn lenient<T>(
    mode: BuildMode,
    fallback: T,
    error: SessionConfigError,
    warning: impl FnOnce(),
) -> Result<T, SessionConfigError> {
    match mode {
        BuildMode::Debug => {
            warning();
            Ok(fallback)
        }
        BuildMode::Release => Err(error),
    }
}

/// Interpret a `SESSION_SAMESITE` value, case-insensitively.
pub(super) fn same_site_value(
    raw: &str,
    mode: BuildMode,
    cookie_secure: bool,
    fallback: SameSite,
) -> Result<SameSite, SessionConfigError> {
    let policy = match raw.trim().to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "lax" => SameSite::Lax,
        "none" => SameSite::None,
        _ => {
            return lenient(
                mode,
                fallback,
                SessionConfigError::InvalidEnv {
                    name: SAMESITE_ENV,
                    value: raw.to_owned(),
                    expected: SAMESITE_EXPECTED,
                },
                || warn!(value = %raw, ?fallback, "SESSION_SAMESITE not recognised"),
            );
        }
    };
    if policy == SameSite::None && !cookie_secure {
        lenient(mode, (), SessionConfigError::InsecureSameSiteNone, || {
            warn!("SameSite=None on an insecure cookie; browsers may drop the session");
        })?;
    }
    Ok(policy)
}

pub(super) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}
