//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs and table definitions stay private to this module.
//!
//! # Example
//!
//! ```no_run
//! use stockroom::outbound::persistence::{DbPool, DieselItemRepository, PoolConfig};
//!
//! # async fn connect() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/stockroom")).await?;
//! let items = DieselItemRepository::new(pool);
//! # let _ = items;
//! # Ok(())
//! # }
//! ```

mod diesel_item_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_item_repository::DieselItemRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
