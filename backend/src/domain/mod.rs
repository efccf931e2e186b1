//! Domain primitives, services and ports.
//!
//! Purpose: keep the inventory rules independent of HTTP and storage.
//! Inbound adapters speak to the driving ports in [`ports`]; outbound
//! adapters implement the driven ones.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failures.
//! - Username, User, Credentials: account identity.
//! - Item, ItemDraft, ItemInput, ItemId: inventory records.
//! - AuthService, InventoryService: port implementations.

pub mod auth;
pub mod auth_service;
pub mod error;
pub mod inventory_service;
pub mod item;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::auth::{Credentials, CredentialsValidationError};
pub use self::auth_service::{AuthError, AuthService};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::inventory_service::{InventoryError, InventoryService};
pub use self::item::{Item, ItemDraft, ItemId, ItemInput, ItemValidationError};
pub use self::trace_id::TraceId;
pub use self::user::{PasswordHash, USERNAME_MAX, User, UserValidationError, Username};
