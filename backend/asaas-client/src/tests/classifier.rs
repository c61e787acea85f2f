// Unit tests for response classification

use crate::classifier::classify;
use crate::error::{AsaasError, ValidationCode};

use common::HttpStatusCode;

const URL: &str = "https://sandbox.asaas.com/api/v3/customers/cus_123";

/// **VALUE**: Verifies a known 400 code becomes the matching validation error.
///
/// **WHY THIS MATTERS**: Callers branch on the code ("invalid customer" shows a
/// different form than "invalid due date").
///
/// **BUG THIS CATCHES**: Would catch reading the wrong entry, or losing the
/// server's description.
#[test]
fn given_known_validation_code_when_classified_then_validation_error_with_description() {
    let body = r#"{"errors":[{"code":"invalid_customer","description":"X"}]}"#;

    let err = classify(HttpStatusCode::BAD_REQUEST, URL, body).unwrap_err();

    assert_eq!(err.validation_code(), Some(ValidationCode::InvalidCustomer));
    assert_eq!(err.message(), "X");
    assert_eq!(err.status_code(), Some(HttpStatusCode::BAD_REQUEST));
}

#[test]
fn given_several_errors_when_classified_then_first_entry_decides() {
    let body = r#"{"errors":[
        {"code":"invalid_dueDate","description":"first"},
        {"code":"invalid_value","description":"second"}
    ]}"#;

    let err = classify(HttpStatusCode::BAD_REQUEST, URL, body).unwrap_err();

    assert_eq!(err.validation_code(), Some(ValidationCode::InvalidDueDate));
    assert_eq!(err.message(), "first");
}

/// **VALUE**: Verifies unknown 400 codes fall back to a generic API error.
///
/// **BUG THIS CATCHES**: Would catch mapping every 400 onto some validation
/// variant, which would mislead callers about the cause.
#[test]
fn given_unknown_validation_code_when_classified_then_generic_api_error_keeps_code() {
    let body = r#"{"errors":[{"code":"insufficient_balance","description":"No funds"}]}"#;

    let err = classify(HttpStatusCode::BAD_REQUEST, URL, body).unwrap_err();

    assert!(err.validation_code().is_none());
    match err {
        AsaasError::Api {
            status_code,
            code,
            message,
            ..
        } => {
            assert_eq!(status_code, HttpStatusCode::BAD_REQUEST);
            assert_eq!(code.as_deref(), Some("insufficient_balance"));
            assert_eq!(message, "No funds");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn given_unparseable_bad_request_when_classified_then_raw_body_in_message() {
    let err = classify(HttpStatusCode::BAD_REQUEST, URL, "<html>oops</html>").unwrap_err();

    assert!(matches!(err, AsaasError::Api { .. }));
    assert_eq!(err.message(), "<html>oops</html>");
}

#[test]
fn given_bad_request_with_empty_errors_when_classified_then_generic_api_error() {
    let err = classify(HttpStatusCode::BAD_REQUEST, URL, r#"{"errors":[]}"#).unwrap_err();
    assert!(matches!(err, AsaasError::Api { code: None, .. }));
}

/// **VALUE**: Verifies 404 carries the exact URL that was requested.
///
/// **BUG THIS CATCHES**: Would catch reporting the base URL or path only,
/// which makes "which id was missing?" unanswerable from logs.
#[test]
fn given_not_found_when_classified_then_error_carries_url() {
    let err = classify(HttpStatusCode::NOT_FOUND, URL, "").unwrap_err();

    assert!(err.is_not_found());
    match err {
        AsaasError::NotFound { url, .. } => assert_eq!(url, URL),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn given_server_error_when_classified_then_api_error_with_status() {
    let err = classify(HttpStatusCode(500), URL, "Internal Server Error").unwrap_err();

    assert_eq!(err.status_code(), Some(HttpStatusCode(500)));
    assert_eq!(err.message(), "Internal Server Error");
    assert!(err.to_string().contains("HTTP 500"));
}

#[test]
fn given_unauthorized_with_empty_body_when_classified_then_placeholder_message() {
    let err = classify(HttpStatusCode(401), URL, "  ").unwrap_err();
    assert_eq!(err.message(), "empty response body");
}

/// **VALUE**: Verifies success responses pass through, even ones that look like
/// error bodies.
///
/// **BUG THIS CATCHES**: Would catch classifying by body shape instead of status.
#[test]
fn given_success_status_when_classified_then_passes() {
    let body = r#"{"errors":[{"code":"invalid_customer","description":"X"}]}"#;

    assert!(classify(HttpStatusCode(200), URL, body).is_ok());
    assert!(classify(HttpStatusCode(204), URL, "").is_ok());
    assert!(classify(HttpStatusCode(302), URL, "").is_ok());
}
