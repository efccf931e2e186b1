//! Process-local adapters used when no database is configured, and by tests.
//!
//! State lives behind a `tokio` `RwLock` and disappears with the process.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::ports::{
    ItemPersistenceError, ItemRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{Item, ItemDraft, ItemId, User, Username};

/// In-memory [`UserRepository`].
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Username, User>>,
}

impl InMemoryUserRepository {
    /// Number of registered users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether no user has registered yet.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.username()) {
            return Err(UserPersistenceError::duplicate(user.username().as_ref()));
        }
        users.insert(user.username().clone(), user.clone());
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.users.read().await.get(username).cloned())
    }
}

/// In-memory [`ItemRepository`]. Items are kept in insertion order, which
/// is creation order.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
}

fn is_target(item: &Item, owner: &Username, id: &ItemId) -> bool {
    item.id == *id && item.owner == *owner
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list_for_owner(&self, owner: &Username) -> Result<Vec<Item>, ItemPersistenceError> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .filter(|item| item.owner == *owner)
            .cloned()
            .collect())
    }

    async fn find(
        &self,
        owner: &Username,
        id: &ItemId,
    ) -> Result<Option<Item>, ItemPersistenceError> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .find(|item| is_target(item, owner, id))
            .cloned())
    }

    async fn insert(&self, item: &Item) -> Result<(), ItemPersistenceError> {
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(ItemPersistenceError::query(format!(
                "item {} already stored",
                item.id
            )));
        }
        items.push(item.clone());
        Ok(())
    }

    async fn update(
        &self,
        owner: &Username,
        id: &ItemId,
        draft: &ItemDraft,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Item>, ItemPersistenceError> {
        let mut items = self.items.write().await;
        Ok(items
            .iter_mut()
            .find(|item| is_target(item, owner, id))
            .map(|item| {
                item.apply(draft.clone(), updated_at);
                item.clone()
            }))
    }

    async fn delete(&self, owner: &Username, id: &ItemId) -> Result<bool, ItemPersistenceError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| !is_target(item, owner, id));
        Ok(items.len() < before)
    }
}
