//! Registration, login and logout pages.
//!
//! ```text
//! GET  /register      POST /register  username=alice&password=pw1
//! GET  /login         POST /login     username=alice&password=pw1
//! GET  /logout        POST /logout
//! ```

use actix_web::{HttpResponse, web};
use tracing::debug;

use super::error::{LOGIN_PATH, PageResult};
use super::flash::Flash;
use super::forms::{LoginForm, RegisterForm};
use super::respond::{flash_redirect, page};
use super::session::SessionContext;
use super::state::HttpState;
use super::views;
use crate::domain::{AuthError, Credentials};

pub(crate) const REGISTER_PATH: &str = "/register";
pub(crate) const HOME_PATH: &str = "/";

pub async fn register_page(session: SessionContext) -> PageResult<HttpResponse> {
    let user = session.username()?;
    Ok(page(&session, user.as_ref(), "Register", &views::register_form()))
}

/// Create an account and sign the new user in.
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<RegisterForm>,
) -> PageResult<HttpResponse> {
    let credentials = match Credentials::try_from(form.into_inner()) {
        Ok(credentials) => credentials,
        Err(err) => return flash_redirect(&session, Flash::error(err.to_string()), REGISTER_PATH),
    };
    match state.accounts.register(&credentials).await {
        Ok(user) => {
            session.persist_user(user.username())?;
            flash_redirect(&session, Flash::success("Registration successful!"), HOME_PATH)
        }
        Err(err @ (AuthError::DuplicateUser { .. } | AuthError::InvalidInput(_))) => {
            flash_redirect(&session, Flash::error(err.to_string()), REGISTER_PATH)
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn login_page(session: SessionContext) -> PageResult<HttpResponse> {
    let user = session.username()?;
    Ok(page(&session, user.as_ref(), "Log in", &views::login_form()))
}

/// Check credentials and bind the session on success.
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> PageResult<HttpResponse> {
    let credentials = match Credentials::try_from(form.into_inner()) {
        Ok(credentials) => credentials,
        Err(err) => return flash_redirect(&session, Flash::error(err.to_string()), LOGIN_PATH),
    };
    match state.accounts.login(&credentials).await {
        Ok(user) => {
            session.persist_user(user.username())?;
            flash_redirect(&session, Flash::success("Welcome back!"), HOME_PATH)
        }
        Err(err @ (AuthError::InvalidCredentials | AuthError::InvalidInput(_))) => {
            debug!(username = %credentials.username(), "login failed");
            flash_redirect(&session, Flash::error(err.to_string()), LOGIN_PATH)
        }
        Err(err) => Err(err.into()),
    }
}

/// Forget the signed-in user. Safe to call without a session.
pub async fn logout(session: SessionContext) -> PageResult<HttpResponse> {
    session.end_session();
    flash_redirect(&session, Flash::info("You have logged out"), LOGIN_PATH)
}
