//! Driving port for inventory reads.

use async_trait::async_trait;

use crate::domain::{InventoryError, Item, ItemId, Username};

/// Domain use-case port for listing and fetching items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryQuery: Send + Sync {
    /// Every item owned by `owner`, oldest first.
    async fn list_for_user(&self, owner: &Username) -> Result<Vec<Item>, InventoryError>;

    /// One owned item. Foreign and missing ids both yield
    /// [`InventoryError::NotFound`].
    async fn find(&self, owner: &Username, id: &ItemId) -> Result<Item, InventoryError>;
}
