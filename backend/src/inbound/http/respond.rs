//! Response helpers shared by page handlers.

use actix_web::HttpResponse;
use actix_web::http::header::{self, ContentType};

use super::error::PageResult;
use super::flash::Flash;
use super::session::SessionContext;
use super::views;
use crate::domain::Username;

/// `303 See Other` to `location`.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Queue `flash` and redirect to `location`.
pub(crate) fn flash_redirect(
    session: &SessionContext,
    flash: Flash,
    location: &str,
) -> PageResult<HttpResponse> {
    session.push_flash(flash)?;
    Ok(see_other(location))
}

/// Render a full page, draining pending flashes into it.
pub(crate) fn page(
    session: &SessionContext,
    user: Option<&Username>,
    title: &str,
    body: &str,
) -> HttpResponse {
    let flashes = session.take_flashes();
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body(views::layout(title, user, &flashes, body))
}
