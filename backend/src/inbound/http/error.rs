//! HTTP adapter mapping for domain errors.
//!
//! The domain error type stays HTTP-agnostic; this module turns it into an
//! HTML error page with a matching status code. `Unauthorized` becomes a
//! redirect to the login form instead of a page.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use super::views;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for page handlers.
pub type PageResult<T> = Result<T, Error>;

pub(crate) const LOGIN_PATH: &str = "/login";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn title_for(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InvalidRequest => "Bad request",
        ErrorCode::Unauthorized => "Login required",
        ErrorCode::NotFound => "Not found",
        ErrorCode::Conflict => "Conflict",
        ErrorCode::ServiceUnavailable => "Service unavailable",
        ErrorCode::InternalError => "Something went wrong",
    }
}

/// Message safe to show a client.
fn public_message(error: &Error) -> &str {
    match error.code() {
        ErrorCode::InternalError => "Internal server error",
        ErrorCode::ServiceUnavailable => "The service is temporarily unavailable",
        _ => error.message(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::Unauthorized {
            return HttpResponse::SeeOther()
                .insert_header((header::LOCATION, LOGIN_PATH))
                .finish();
        }

        match self.code() {
            ErrorCode::InternalError | ErrorCode::ServiceUnavailable => {
                error!(code = %self.code(), trace_id = ?self.trace_id(), message = %self.message(), "request failed");
            }
            _ => warn!(code = %self.code(), trace_id = ?self.trace_id(), message = %self.message(), "request rejected"),
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        let title = title_for(self.code());
        let body = views::error_page(public_message(self), self.trace_id());
        builder
            .content_type(ContentType::html())
            .body(views::layout(title, None, &[], &body))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests;
