//! Outbound adapters implementing the driven domain ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: process-local repositories for database-less runs.
//! - **security**: Argon2 credential hashing.
//!
//! Adapters only translate between domain types and infrastructure; they
//! hold no business rules.

pub mod memory;
pub mod persistence;
pub mod security;
