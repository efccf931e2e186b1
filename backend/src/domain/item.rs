//! Inventory item model and input validation.
//!
//! Form input arrives as text. [`ItemInput::validate`] is the single place
//! where quantity and price are parsed; everything downstream works with the
//! typed [`ItemDraft`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::user::Username;

/// Errors raised while validating item input or identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemValidationError {
    /// Identifier is not a UUID.
    #[error("item id must be a valid UUID")]
    InvalidId,
    /// Quantity is not a base-10 integer. `value` stays out of the message.
    #[error("quantity must be a whole number")]
    InvalidQuantity { value: String },
    /// Price is not a finite decimal number.
    #[error("price must be a number")]
    InvalidPrice { value: String },
}

/// Opaque item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a fresh identifier for a new item.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, such as one read back from storage.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for ItemId {
    type Err = ItemValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ItemValidationError::InvalidId)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Raw item fields as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemInput {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    pub supplier: String,
    pub location: String,
}

impl ItemInput {
    /// Parse numeric fields and produce a typed draft.
    ///
    /// Surrounding whitespace is ignored for `quantity` and `price`. Text
    /// fields are kept as submitted.
    ///
    /// # Examples
    /// ```
    /// use stockroom::domain::ItemInput;
    ///
    /// let draft = ItemInput {
    ///     name: "Bolt".into(),
    ///     quantity: "10".into(),
    ///     price: "0.50".into(),
    ///     ..ItemInput::default()
    /// }
    /// .validate()
    /// .unwrap();
    /// assert_eq!(draft.quantity, 10);
    /// assert!((draft.price - 0.5).abs() < f64::EPSILON);
    /// ```
    pub fn validate(self) -> Result<ItemDraft, ItemValidationError> {
        let quantity = parse_quantity(&self.quantity)?;
        let price = parse_price(&self.price)?;
        Ok(ItemDraft {
            name: self.name,
            sku: self.sku,
            category: self.category,
            quantity,
            price,
            supplier: self.supplier,
            location: self.location,
        })
    }
}

fn parse_quantity(raw: &str) -> Result<i64, ItemValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ItemValidationError::InvalidQuantity {
            value: raw.to_owned(),
        })
}

fn parse_price(raw: &str) -> Result<f64, ItemValidationError> {
    let invalid = || ItemValidationError::InvalidPrice {
        value: raw.to_owned(),
    };
    let price = raw.trim().parse::<f64>().map_err(|_| invalid())?;
    if price.is_finite() {
        Ok(price)
    } else {
        Err(invalid())
    }
}

/// Validated, owner-agnostic item fields. Every edit overwrites all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
    pub supplier: String,
    pub location: String,
}

/// Persisted inventory record.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub owner: Username,
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

impl Item {
    /// Materialise a new item owned by `owner`.
    #[must_use]
    pub fn create(owner: Username, draft: ItemDraft, now: DateTime<Utc>) -> Self {
        let ItemDraft {
            name,
            sku,
            category,
            quantity,
            price,
            supplier,
            location,
        } = draft;
        Self {
            id: ItemId::random(),
            owner,
            name,
            sku,
            category,
            quantity,
            price,
            supplier,
            location,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every mutable field, keeping id, owner and creation time.
    pub fn apply(&mut self, draft: ItemDraft, now: DateTime<Utc>) {
        self.name = draft.name;
        self.sku = draft.sku;
        self.category = draft.category;
        self.quantity = draft.quantity;
        self.price = draft.price;
        self.supplier = draft.supplier;
        self.location = draft.location;
        self.updated_at = now;
    }

    /// Current field values as a draft, e.g. to prefill an edit form.
    #[must_use]
    pub fn draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.name.clone(),
            sku: self.sku.clone(),
            category: self.category.clone(),
            quantity: self.quantity,
            price: self.price,
            supplier: self.supplier.clone(),
            location: self.location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn input() -> ItemInput {
        ItemInput {
            name: "Bolt".into(),
            sku: "B1".into(),
            category: "Hardware".into(),
            quantity: "5".into(),
            price: "2.50".into(),
            supplier: "Acme".into(),
            location: "Aisle 3".into(),
        }
    }

    #[rstest]
    fn validate_parses_numeric_fields(input: ItemInput) {
        let draft = input.validate().expect("valid input");
        assert_eq!(draft.quantity, 5);
        assert!((draft.price - 2.5).abs() < f64::EPSILON);
        assert_eq!(draft.name, "Bolt");
        assert_eq!(draft.location, "Aisle 3");
    }

    #[rstest]
    #[case(" 7 ", 7)]
    #[case("-3", -3)]
    #[case("0", 0)]
    fn quantity_accepts_integers(mut input: ItemInput, #[case] raw: &str, #[case] expected: i64) {
        input.quantity = raw.into();
        assert_eq!(input.validate().expect("valid input").quantity, expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("1.5")]
    #[case("99999999999999999999")]
    fn quantity_rejects_non_integers(mut input: ItemInput, #[case] raw: &str) {
        input.quantity = raw.into();
        assert_eq!(
            input.validate(),
            Err(ItemValidationError::InvalidQuantity { value: raw.into() })
        );
    }

    #[rstest]
    #[case("free")]
    #[case("")]
    #[case("NaN")]
    #[case("inf")]
    fn price_rejects_non_finite_or_garbage(mut input: ItemInput, #[case] raw: &str) {
        input.price = raw.into();
        assert_eq!(
            input.validate(),
            Err(ItemValidationError::InvalidPrice { value: raw.into() })
        );
    }

    #[rstest]
    fn messages_do_not_repeat_rejected_input(mut input: ItemInput) {
        let junk = "x".repeat(5000);
        input.quantity = junk.clone();
        let quantity_err = input.clone().validate().expect_err("bad quantity");
        assert_eq!(quantity_err.to_string(), "quantity must be a whole number");

        input.quantity = "1".into();
        input.price = junk;
        let price_err = input.validate().expect_err("bad price");
        assert_eq!(price_err.to_string(), "price must be a number");
    }

    #[rstest]
    fn apply_overwrites_fields_but_keeps_identity(input: ItemInput) {
        let owner = Username::new("alice").expect("valid username");
        let created = Utc::now();
        let mut item = Item::create(owner.clone(), input.validate().expect("valid"), created);
        let id = item.id;

        let replacement = ItemDraft {
            name: "Nut".into(),
            sku: "N1".into(),
            category: "Fasteners".into(),
            quantity: 40,
            price: 0.1,
            supplier: "Bolt Co".into(),
            location: "Bin 9".into(),
        };
        let later = created + chrono::TimeDelta::seconds(5);
        item.apply(replacement.clone(), later);

        assert_eq!(item.id, id);
        assert_eq!(item.owner, owner);
        assert_eq!(item.created_at, created);
        assert_eq!(item.updated_at, later);
        assert_eq!(item.draft(), replacement);
    }

    #[rstest]
    fn item_id_round_trips_through_display() {
        let id = ItemId::random();
        let parsed: ItemId = id.to_string().parse().expect("valid id");
        assert_eq!(parsed, id);
    }

    #[rstest]
    #[case("")]
    #[case("507f1f77bcf86cd799439011")]
    fn malformed_item_ids_are_rejected(#[case] raw: &str) {
        assert_eq!(raw.parse::<ItemId>(), Err(ItemValidationError::InvalidId));
    }
}
