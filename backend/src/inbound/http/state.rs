//! Shared HTTP adapter state.
//!
//! Handlers accept this via `web::Data` so they depend only on domain ports
//! and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountService, InventoryCommand, InventoryQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountService>,
    pub inventory: Arc<dyn InventoryCommand>,
    pub inventory_query: Arc<dyn InventoryQuery>,
}

impl HttpState {
    /// Bundle the ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use mockable::DefaultClock;
    /// use stockroom::domain::{AuthService, InventoryService};
    /// use stockroom::inbound::http::state::HttpState;
    /// use stockroom::outbound::memory::{InMemoryItemRepository, InMemoryUserRepository};
    /// use stockroom::outbound::security::Argon2PasswordHasher;
    ///
    /// let inventory = Arc::new(InventoryService::new(
    ///     Arc::new(InMemoryItemRepository::default()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let accounts = Arc::new(AuthService::new(
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Arc::new(Argon2PasswordHasher::default()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(accounts, inventory.clone(), inventory);
    /// # let _ = state;
    /// ```
    pub fn new(
        accounts: Arc<dyn AccountService>,
        inventory: Arc<dyn InventoryCommand>,
        inventory_query: Arc<dyn InventoryQuery>,
    ) -> Self {
        Self {
            accounts,
            inventory,
            inventory_query,
        }
    }
}
