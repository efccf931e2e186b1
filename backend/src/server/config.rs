//! HTTP server configuration object.

use stockroom::inbound::http::session_config::SessionSettings;
use stockroom::outbound::persistence::DbPool;

/// Everything [`super::create_server`] needs besides health state.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: String,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: impl Into<String>) -> Self {
        Self {
            session,
            bind_addr: bind_addr.into(),
            db_pool: None,
        }
    }

    /// Back the repositories with PostgreSQL instead of process memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
