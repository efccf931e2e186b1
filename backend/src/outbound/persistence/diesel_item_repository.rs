//! PostgreSQL-backed `ItemRepository` implementation using Diesel ORM.
//!
//! Every statement filters on `owner` as well as `id`, so a foreign item id
//! simply matches no rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ItemPersistenceError, ItemRepository};
use crate::domain::{Item, ItemDraft, ItemId, Username};

use super::error_mapping::map_diesel_error;
use super::models::{ItemRow, ItemUpdate, NewItemRow};
use super::pool::{DbPool, PoolError};
use super::schema::items;

/// Diesel-backed implementation of the [`ItemRepository`] port.
#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ItemPersistenceError {
    ItemPersistenceError::connection(error.into_message())
}

fn map_item_diesel_error(error: diesel::result::Error) -> ItemPersistenceError {
    map_diesel_error(
        error,
        ItemPersistenceError::query,
        ItemPersistenceError::connection,
    )
}

fn row_to_item(row: ItemRow) -> Result<Item, ItemPersistenceError> {
    let owner = Username::new(&row.owner)
        .map_err(|err| ItemPersistenceError::query(format!("stored owner invalid: {err}")))?;
    Ok(Item {
        id: ItemId::from_uuid(row.id),
        owner,
        name: row.name,
        sku: row.sku,
        category: row.category,
        quantity: row.quantity,
        price: row.price,
        supplier: row.supplier,
        location: row.location,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[async_trait]
impl ItemRepository for DieselItemRepository {
    async fn list_for_owner(&self, owner: &Username) -> Result<Vec<Item>, ItemPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ItemRow> = items::table
            .filter(items::owner.eq(owner.as_ref()))
            .order((items::created_at.asc(), items::id.asc()))
            .select(ItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_item_diesel_error)?;

        rows.into_iter().map(row_to_item).collect()
    }

    async fn find(
        &self,
        owner: &Username,
        id: &ItemId,
    ) -> Result<Option<Item>, ItemPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ItemRow> = items::table
            .filter(items::id.eq(id.as_uuid()))
            .filter(items::owner.eq(owner.as_ref()))
            .select(ItemRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_item_diesel_error)?;

        row.map(row_to_item).transpose()
    }

    async fn insert(&self, item: &Item) -> Result<(), ItemPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewItemRow {
            id: *item.id.as_uuid(),
            owner: item.owner.as_ref(),
            name: &item.name,
            sku: &item.sku,
            category: &item.category,
            quantity: item.quantity,
            price: item.price,
            supplier: &item.supplier,
            location: &item.location,
            created_at: item.created_at,
            updated_at: item.updated_at,
        };

        diesel::insert_into(items::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_item_diesel_error)
    }

    async fn update(
        &self,
        owner: &Username,
        id: &ItemId,
        draft: &ItemDraft,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Item>, ItemPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = ItemUpdate {
            name: &draft.name,
            sku: &draft.sku,
            category: &draft.category,
            quantity: draft.quantity,
            price: draft.price,
            supplier: &draft.supplier,
            location: &draft.location,
            updated_at,
        };

        let row: Option<ItemRow> = diesel::update(
            items::table
                .filter(items::id.eq(id.as_uuid()))
                .filter(items::owner.eq(owner.as_ref())),
        )
        .set(&changes)
        .returning(ItemRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(map_item_diesel_error)?;

        row.map(row_to_item).transpose()
    }

    async fn delete(&self, owner: &Username, id: &ItemId) -> Result<bool, ItemPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(
            items::table
                .filter(items::id.eq(id.as_uuid()))
                .filter(items::owner.eq(owner.as_ref())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_item_diesel_error)?;

        Ok(deleted > 0)
    }
}
