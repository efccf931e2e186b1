//! Internal Diesel row structs. Never exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{items, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for registering a user.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub created_at: DateTime<Utc>,
}

/// Row struct for reading from the items table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ItemRow {
    pub id: Uuid,
    pub owner: String,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
    pub supplier: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating items.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = items)]
pub(crate) struct NewItemRow<'a> {
    pub id: Uuid,
    pub owner: &'a str,
    pub name: &'a str,
    pub sku: &'a str,
    pub category: &'a str,
    pub quantity: i64,
    pub price: f64,
    pub supplier: &'a str,
    pub location: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changeset overwriting every mutable item column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = items)]
pub(crate) struct ItemUpdate<'a> {
    pub name: &'a str,
    pub sku: &'a str,
    pub category: &'a str,
    pub quantity: i64,
    pub price: f64,
    pub supplier: &'a str,
    pub location: &'a str,
    pub updated_at: DateTime<Utc>,
}
