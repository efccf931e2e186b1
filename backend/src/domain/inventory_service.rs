//! Inventory domain service implementing the command and query ports.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{InventoryCommand, InventoryQuery, ItemPersistenceError, ItemRepository};
use crate::domain::{Error, Item, ItemId, ItemInput, ItemValidationError, Username};

/// Failures surfaced by inventory operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// Submitted fields failed validation. Nothing was written.
    #[error(transparent)]
    InvalidInput(#[from] ItemValidationError),
    /// No item with that id belongs to the caller.
    #[error("item not found")]
    NotFound,
    /// The item store failed.
    #[error(transparent)]
    Persistence(#[from] ItemPersistenceError),
}

impl From<InventoryError> for Error {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::InvalidInput(inner) => Error::invalid_request(inner.to_string()),
            InventoryError::NotFound => Error::not_found("item not found"),
            InventoryError::Persistence(ItemPersistenceError::Connection { message }) => {
                Error::service_unavailable(format!("item repository unavailable: {message}"))
            }
            InventoryError::Persistence(inner) => Error::internal(inner.to_string()),
        }
    }
}

/// Inventory service backed by an [`ItemRepository`].
#[derive(Clone)]
pub struct InventoryService<R> {
    items: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> InventoryService<R> {
    /// Create a new service.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use stockroom::domain::InventoryService;
    /// use stockroom::outbound::memory::InMemoryItemRepository;
    ///
    /// let service = InventoryService::new(
    ///     Arc::new(InMemoryItemRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(items: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { items, clock }
    }
}

#[async_trait]
impl<R> InventoryQuery for InventoryService<R>
where
    R: ItemRepository,
{
    async fn list_for_user(&self, owner: &Username) -> Result<Vec<Item>, InventoryError> {
        Ok(self.items.list_for_owner(owner).await?)
    }

    async fn find(&self, owner: &Username, id: &ItemId) -> Result<Item, InventoryError> {
        self.items
            .find(owner, id)
            .await?
            .ok_or(InventoryError::NotFound)
    }
}

#[async_trait]
impl<R> InventoryCommand for InventoryService<R>
where
    R: ItemRepository,
{
    async fn create(&self, owner: &Username, input: ItemInput) -> Result<Item, InventoryError> {
        let draft = input.validate()?;
        let item = Item::create(owner.clone(), draft, self.clock.utc());
        self.items.insert(&item).await?;
        info!(%owner, item_id = %item.id, "item created");
        Ok(item)
    }

    async fn update(
        &self,
        owner: &Username,
        id: &ItemId,
        input: ItemInput,
    ) -> Result<Item, InventoryError> {
        let draft = input.validate()?;
        let item = self
            .items
            .update(owner, id, &draft, self.clock.utc())
            .await?
            .ok_or(InventoryError::NotFound)?;
        info!(%owner, item_id = %id, "item updated");
        Ok(item)
    }

    async fn delete(&self, owner: &Username, id: &ItemId) -> Result<(), InventoryError> {
        if self.items.delete(owner, id).await? {
            info!(%owner, item_id = %id, "item deleted");
            Ok(())
        } else {
            Err(InventoryError::NotFound)
        }
    }
}
