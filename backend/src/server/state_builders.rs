//! Builders wiring repositories and services into HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use stockroom::domain::ports::{CredentialHasher, ItemRepository, UserRepository};
use stockroom::domain::{AuthService, InventoryService};
use stockroom::inbound::http::state::HttpState;
use stockroom::outbound::memory::{InMemoryItemRepository, InMemoryUserRepository};
use stockroom::outbound::persistence::{DbPool, DieselItemRepository, DieselUserRepository};
use stockroom::outbound::security::Argon2PasswordHasher;

/// Build handler state once so every worker shares the same stores.
pub(super) fn build_http_state(db_pool: Option<&DbPool>) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let hasher = Arc::new(Argon2PasswordHasher::default());
    let state = match db_pool {
        Some(pool) => assemble(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselItemRepository::new(pool.clone())),
            hasher,
            clock,
        ),
        None => assemble(
            Arc::new(InMemoryUserRepository::default()),
            Arc::new(InMemoryItemRepository::default()),
            hasher,
            clock,
        ),
    };
    web::Data::new(state)
}

fn assemble<U, R, H>(users: Arc<U>, items: Arc<R>, hasher: Arc<H>, clock: Arc<dyn Clock>) -> HttpState
where
    U: UserRepository + 'static,
    R: ItemRepository + 'static,
    H: CredentialHasher + 'static,
{
    let inventory = Arc::new(InventoryService::new(items, Arc::clone(&clock)));
    let accounts = Arc::new(AuthService::new(users, hasher, clock));
    HttpState::new(accounts, inventory.clone(), inventory)
}
