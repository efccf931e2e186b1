//! Application settings loaded via OrthoConfig.
//!
//! Values layer defaults, an optional config file, `STOCKROOM_*` environment
//! variables and command-line flags. Session cookie toggles are separate;
//! see [`crate::inbound::http::session_config`].

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_BIND_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Errors raised while deriving connection details from settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The database URL could not be parsed.
    #[error("invalid database URL: {0}")]
    InvalidDatabaseUrl(#[from] url::ParseError),
}

/// Runtime settings for the server binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOCKROOM")]
pub struct AppSettings {
    /// PostgreSQL connection string. Unset means the in-memory store.
    pub database_url: Option<String>,
    /// Database name replacing the path component of `database_url`.
    pub database_name: Option<String>,
    pub bind_host: Option<String>,
    pub bind_port: Option<u16>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl AppSettings {
    /// Socket address string for the HTTP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!(
            "{}:{}",
            self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST),
            self.bind_port.unwrap_or(DEFAULT_BIND_PORT)
        )
    }

    /// Pool size, falling back to the default.
    #[must_use]
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Effective connection string, with `database_name` applied.
    ///
    /// Returns `Ok(None)` when no database is configured.
    pub fn database_url(&self) -> Result<Option<String>, SettingsError> {
        let Some(raw) = self.database_url.as_deref().filter(|raw| !raw.trim().is_empty()) else {
            return Ok(None);
        };
        match self.database_name.as_deref() {
            Some(name) if !name.is_empty() => {
                let mut url = Url::parse(raw)?;
                url.set_path(&format!("/{}", name.trim_start_matches('/')));
                Ok(Some(url.to_string()))
            }
            _ => Ok(Some(raw.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "STOCKROOM_DATABASE_URL",
        "STOCKROOM_DATABASE_NAME",
        "STOCKROOM_BIND_HOST",
        "STOCKROOM_BIND_PORT",
        "STOCKROOM_DB_MAX_CONNECTIONS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("stockroom")]).expect("config should load")
    }

    fn settings(url: Option<&str>, name: Option<&str>) -> AppSettings {
        AppSettings {
            database_url: url.map(str::to_owned),
            database_name: name.map(str::to_owned),
            bind_host: None,
            bind_port: None,
            db_max_connections: None,
        }
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert!(settings.database_url.is_none());
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080");
        assert_eq!(settings.db_max_connections(), 10);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "STOCKROOM_DATABASE_URL",
                Some("postgres://app@db:5432/inventory".to_owned()),
            ),
            ("STOCKROOM_DATABASE_NAME", None),
            ("STOCKROOM_BIND_HOST", Some("127.0.0.1".to_owned())),
            ("STOCKROOM_BIND_PORT", Some("9000".to_owned())),
            ("STOCKROOM_DB_MAX_CONNECTIONS", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:9000");
        assert_eq!(settings.db_max_connections(), 4);
        assert_eq!(
            settings.database_url().expect("valid url").as_deref(),
            Some("postgres://app@db:5432/inventory")
        );
    }

    #[rstest]
    #[case(None, None, None)]
    #[case(Some("  "), None, None)]
    #[case(
        Some("postgres://app@db/inventory"),
        None,
        Some("postgres://app@db/inventory")
    )]
    #[case(
        Some("postgres://app@db:5432/inventory"),
        Some("inventory_test"),
        Some("postgres://app@db:5432/inventory_test")
    )]
    fn database_name_replaces_url_path(
        #[case] url: Option<&str>,
        #[case] name: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let resolved = settings(url, name).database_url().expect("valid url");
        assert_eq!(resolved.as_deref(), expected);
    }

    #[rstest]
    fn malformed_url_with_name_is_rejected() {
        let err = settings(Some("not a url"), Some("db"))
            .database_url()
            .expect_err("cannot rewrite");
        assert!(matches!(err, SettingsError::InvalidDatabaseUrl(_)));
    }
}
