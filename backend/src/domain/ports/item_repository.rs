//! Port abstraction for inventory item storage.
//!
//! Every operation is scoped to an owner. Adapters must treat an item owned
//! by somebody else exactly like a missing one.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Item, ItemDraft, ItemId, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by item repository adapters.
    pub enum ItemPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "item repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "item repository query failed: {message}",
    }
}

/// Port for reading and writing inventory items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items owned by `owner`, oldest first.
    async fn list_for_owner(&self, owner: &Username) -> Result<Vec<Item>, ItemPersistenceError>;

    /// A single item, or `None` when absent or owned by someone else.
    async fn find(
        &self,
        owner: &Username,
        id: &ItemId,
    ) -> Result<Option<Item>, ItemPersistenceError>;

    /// Store a freshly created item.
    async fn insert(&self, item: &Item) -> Result<(), ItemPersistenceError>;

    /// Overwrite the mutable fields of an owned item.
    ///
    /// Returns the updated item, or `None` when nothing matched.
    async fn update(
        &self,
        owner: &Username,
        id: &ItemId,
        draft: &ItemDraft,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Item>, ItemPersistenceError>;

    /// Remove an owned item. Returns `false` when nothing matched.
    async fn delete(&self, owner: &Username, id: &ItemId) -> Result<bool, ItemPersistenceError>;
}
