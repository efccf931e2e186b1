//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn trace_id() -> String {
    TRACE_ID.to_owned()
}

async fn render(error: Error) -> (StatusCode, Option<String>, String) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = String::from_utf8(bytes.to_vec()).expect("utf8 body");
    (status, header, body)
}

#[rstest]
#[case(ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST)]
#[case(ErrorCode::Unauthorized, StatusCode::UNAUTHORIZED)]
#[case(ErrorCode::NotFound, StatusCode::NOT_FOUND)]
#[case(ErrorCode::Conflict, StatusCode::CONFLICT)]
#[case(ErrorCode::ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE)]
#[case(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] code: ErrorCode, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&Error::new(code, "x")), expected);
}

#[rstest]
#[actix_web::test]
async fn unauthorised_redirects_to_login() {
    let response = ResponseError::error_response(&Error::unauthorized("login required"));
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some(LOGIN_PATH)
    );
}

#[rstest]
#[actix_web::test]
async fn not_found_page_shows_message_and_trace(trace_id: String) {
    let (status, header, body) =
        render(Error::not_found("item not found").with_trace_id(trace_id.clone())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert!(body.contains("item not found"));
    assert!(body.contains(TRACE_ID));
}

#[rstest]
#[case(Error::internal("db password is hunter2"), "Internal server error")]
#[case(
    Error::service_unavailable("pool exhausted at 10.0.0.3"),
    "temporarily unavailable"
)]
#[actix_web::test]
async fn server_failures_are_redacted(#[case] error: Error, #[case] shown: &str) {
    let (_, _, body) = render(error).await;
    assert!(body.contains(shown));
    assert!(!body.contains("hunter2"));
    assert!(!body.contains("10.0.0.3"));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let (_, header, body) = render(Error::invalid_request("bad")).await;
    assert!(header.is_none());
    assert!(!body.contains("Reference"));
}

#[rstest]
fn from_actix_error_is_redacted_internal_error() {
    let err: Error = actix_web::error::ErrorBadRequest("boom").into();
    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
}
