//! Path and method table for the page surface.
//!
//! Routes are grouped per resource so an unsupported method answers
//! `405 Method Not Allowed` rather than falling through to a 404.

use actix_web::web;

use super::{accounts, health, items};

/// Register every page and probe route.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use stockroom::inbound::http::router::configure;
///
/// let app = App::new().configure(configure);
/// # let _ = app;
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(items::index)))
        .service(
            web::resource("/register")
                .route(web::get().to(accounts::register_page))
                .route(web::post().to(accounts::register)),
        )
        .service(
            web::resource("/login")
                .route(web::get().to(accounts::login_page))
                .route(web::post().to(accounts::login)),
        )
        .service(
            web::resource("/logout")
                .route(web::get().to(accounts::logout))
                .route(web::post().to(accounts::logout)),
        )
        .service(
            web::resource("/add_item")
                .route(web::get().to(items::add_item_page))
                .route(web::post().to(items::add_item)),
        )
        .service(
            web::resource("/edit_item/{id}")
                .route(web::get().to(items::edit_item_page))
                .route(web::post().to(items::edit_item)),
        )
        .service(web::resource("/delete_item/{id}").route(web::post().to(items::delete_item)))
        .service(web::resource("/health/ready").route(web::get().to(health::ready)))
        .service(web::resource("/health/live").route(web::get().to(health::live)));
}
