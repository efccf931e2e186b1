//! Inventory pages. Every handler is scoped to the signed-in user; ids that
//! are malformed or belong to someone else read as "not found".

use actix_web::{HttpResponse, web};

use super::accounts::HOME_PATH;
use super::error::PageResult;
use super::flash::Flash;
use super::forms::{ItemForm, prefill};
use super::respond::{flash_redirect, page};
use super::session::SessionContext;
use super::state::HttpState;
use super::views;
use crate::domain::{Error, InventoryError, ItemId, ItemInput};

pub(crate) const ADD_ITEM_PATH: &str = "/add_item";

fn parse_item_id(raw: &str) -> Result<ItemId, Error> {
    raw.parse()
        .map_err(|_| Error::from(InventoryError::NotFound))
}

/// `GET /`: inventory for a signed-in user, landing page otherwise.
pub async fn index(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> PageResult<HttpResponse> {
    let Some(owner) = session.username()? else {
        return Ok(page(&session, None, "Welcome", &views::landing()));
    };
    let items = state.inventory_query.list_for_user(&owner).await?;
    Ok(page(
        &session,
        Some(&owner),
        "Inventory",
        &views::inventory(&items),
    ))
}

pub async fn add_item_page(session: SessionContext) -> PageResult<HttpResponse> {
    let owner = session.require_user()?;
    Ok(page(
        &session,
        Some(&owner),
        "Add item",
        &views::item_form(None, &ItemInput::default()),
    ))
}

pub async fn add_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<ItemForm>,
) -> PageResult<HttpResponse> {
    let owner = session.require_user()?;
    match state.inventory.create(&owner, form.into_inner().into()).await {
        Ok(_) => flash_redirect(&session, Flash::success("Item added successfully!"), HOME_PATH),
        Err(InventoryError::InvalidInput(err)) => {
            flash_redirect(&session, Flash::error(err.to_string()), ADD_ITEM_PATH)
        }
        Err(err) => Err(err.into()),
    }
}

/// `GET /edit_item/{id}`: form prefilled with the stored values.
pub async fn edit_item_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let owner = session.require_user()?;
    let id = parse_item_id(&path)?;
    let item = state.inventory_query.find(&owner, &id).await?;
    Ok(page(
        &session,
        Some(&owner),
        "Edit item",
        &views::item_form(Some(&id), &prefill(&item)),
    ))
}

pub async fn edit_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    form: web::Form<ItemForm>,
) -> PageResult<HttpResponse> {
    let owner = session.require_user()?;
    let id = parse_item_id(&path)?;
    match state
        .inventory
        .update(&owner, &id, form.into_inner().into())
        .await
    {
        Ok(_) => flash_redirect(
            &session,
            Flash::success("Item updated successfully!"),
            HOME_PATH,
        ),
        Err(InventoryError::InvalidInput(err)) => flash_redirect(
            &session,
            Flash::error(err.to_string()),
            &format!("/edit_item/{id}"),
        ),
        Err(err) => Err(err.into()),
    }
}

/// `POST /delete_item/{id}`.
pub async fn delete_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let owner = session.require_user()?;
    let id = parse_item_id(&path)?;
    state.inventory.delete(&owner, &id).await?;
    flash_redirect(&session, Flash::info("Item deleted successfully!"), HOME_PATH)
}
