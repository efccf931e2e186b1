//! Driving port for inventory mutations.

use async_trait::async_trait;

use crate::domain::{InventoryError, Item, ItemId, ItemInput, Username};

/// Domain use-case port for creating, editing and deleting items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryCommand: Send + Sync {
    /// Validate `input` and store it as a new item owned by `owner`.
    async fn create(&self, owner: &Username, input: ItemInput) -> Result<Item, InventoryError>;

    /// Validate `input` and overwrite the owned item `id` with it.
    async fn update(
        &self,
        owner: &Username,
        id: &ItemId,
        input: ItemInput,
    ) -> Result<Item, InventoryError>;

    /// Delete the owned item `id`.
    async fn delete(&self, owner: &Username, id: &ItemId) -> Result<(), InventoryError>;
}
