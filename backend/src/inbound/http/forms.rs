//! Typed form bodies for each page operation.
//!
//! Missing fields deserialise as empty strings so validation, not the
//! extractor, decides what a usable submission is.

use serde::Deserialize;

use super::views::format_price;
use crate::domain::{Credentials, CredentialsValidationError, Item, ItemInput};

/// `POST /register` body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
}

/// `POST /login` body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl TryFrom<RegisterForm> for Credentials {
    type Error = CredentialsValidationError;

    fn try_from(form: RegisterForm) -> Result<Self, Self::Error> {
        Credentials::try_from_parts(&form.username, &form.password)
    }
}

impl TryFrom<LoginForm> for Credentials {
    type Error = CredentialsValidationError;

    fn try_from(form: LoginForm) -> Result<Self, Self::Error> {
        Credentials::try_from_parts(&form.username, &form.password)
    }
}

/// `POST /add_item` and `POST /edit_item/{id}` body.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ItemForm {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    pub supplier: String,
    pub location: String,
}

impl From<ItemForm> for ItemInput {
    fn from(form: ItemForm) -> Self {
        Self {
            name: form.name,
            sku: form.sku,
            category: form.category,
            quantity: form.quantity,
            price: form.price,
            supplier: form.supplier,
            location: form.location,
        }
    }
}

/// Form values for editing an existing item.
pub fn prefill(item: &Item) -> ItemInput {
    ItemInput {
        name: item.name.clone(),
        sku: item.sku.clone(),
        category: item.category.clone(),
        quantity: item.quantity.to_string(),
        price: format_price(item.price),
        supplier: item.supplier.clone(),
        location: item.location.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_fields_default_to_empty() {
        let form: ItemForm =
            serde_json::from_str(r#"{"name":"Bolt","quantity":"10"}"#).expect("form decodes");
        let input = ItemInput::from(form);
        assert_eq!(input.name, "Bolt");
        assert_eq!(input.quantity, "10");
        assert_eq!(input.sku, "");
        assert_eq!(input.location, "");
    }

    #[rstest]
    #[case(r#"{"username":"","password":"pw"}"#)]
    #[case(r#"{"password":"pw"}"#)]
    #[case(r#"{"username":"alice"}"#)]
    fn blank_credentials_are_rejected(#[case] body: &str) {
        let form: LoginForm = serde_json::from_str(body).expect("form decodes");
        assert!(Credentials::try_from(form).is_err());
    }

    #[rstest]
    fn register_form_normalises_username() {
        let form = RegisterForm {
            username: " Alice ".into(),
            password: "pw1".into(),
        };
        let creds = Credentials::try_from(form).expect("valid credentials");
        assert_eq!(creds.username().as_ref(), "alice");
    }

    #[rstest]
    fn prefill_round_trips_through_validation() {
        let owner = crate::domain::Username::new("alice").expect("valid username");
        let draft = ItemInput {
            name: "Bolt".into(),
            quantity: "10".into(),
            price: "0.5".into(),
            ..ItemInput::default()
        }
        .validate()
        .expect("valid input");
        let item = Item::create(owner, draft.clone(), chrono::Utc::now());
        assert_eq!(prefill(&item).validate().expect("still valid"), draft);
    }

    #[rstest]
    fn prefill_shows_price_as_listed() {
        let owner = crate::domain::Username::new("alice").expect("valid username");
        let draft = ItemInput {
            quantity: "1".into(),
            price: "0.125".into(),
            ..ItemInput::default()
        }
        .validate()
        .expect("valid input");
        let item = Item::create(owner, draft, chrono::Utc::now());
        assert_eq!(prefill(&item).price, "0.125");
        let listing = super::super::views::inventory(std::slice::from_ref(&item));
        assert!(listing.contains("<td>0.125</td>"));
    }
}
