//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`UserRepository`, `ItemRepository`, `CredentialHasher`) are
//! implemented by outbound adapters. Driving ports (`AccountService`,
//! `InventoryCommand`, `InventoryQuery`) are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod account_service;
mod credential_hasher;
mod inventory_command;
mod inventory_query;
mod item_repository;
mod user_repository;

#[cfg(test)]
pub use account_service::MockAccountService;
pub use account_service::AccountService;
#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHashError, CredentialHasher};
#[cfg(test)]
pub use inventory_command::MockInventoryCommand;
pub use inventory_command::InventoryCommand;
#[cfg(test)]
pub use inventory_query::MockInventoryQuery;
pub use inventory_query::InventoryQuery;
#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::{ItemPersistenceError, ItemRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
