#![allow(clippy::unwrap_used, clippy::panic)]

mod common;

use common::{test_client, MockTransport};
use hcloud_client::{request::Method, ClientError, Failure};
use hcloud_client::models::errors::{ApiError, ErrorCode};
use time::OffsetDateTime;

fn error_body(code: &str, message: &str, details: Option<serde_json::Value>) -> serde_json::Value {
    let mut error = serde_json::json!({"code": code, "message": message});
    if let Some(details) = details {
        error["details"] = details;
    }
    serde_json::json!({"error": error})
}

async fn list_failure(status_code: u16, body: serde_json::Value) -> Failure {
    let transport = MockTransport::new(status_code, body);
    let client = test_client(transport);

    let report = client.servers().list().await.unwrap_err();
    match report.current_context() {
        ClientError::Api(failure) => failure.clone(),
        other => panic!("expected an API failure, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_response_maps_to_the_unauthorized_variant() {
    let failure = list_failure(
        401,
        error_body(
            "unauthorized",
            "Request was made with an invalid or unknown token",
            None,
        ),
    )
    .await;

    assert_eq!(
        failure.error,
        ApiError::Unauthorized {
            message: "Request was made with an invalid or unknown token".to_string()
        }
    );
    assert_eq!(failure.status_code, 401);
    assert_eq!(failure.request.method, Method::Get);
    assert!(failure.request.url.ends_with("/servers"));
}

#[tokio::test]
async fn rate_limit_response_carries_the_exact_retry_budget() {
    let failure = list_failure(
        429,
        error_body(
            "rate_limit_exceeded",
            "rate limit exceeded",
            Some(serde_json::json!({
                "hourly_rate_limit": 3600,
                "hourly_rate_limit_remaining": 2456,
                "hourly_rate_limit_reset": 1731011315
            })),
        ),
    )
    .await;

    assert_eq!(failure.error.code(), ErrorCode::RateLimitExceeded);
    let ApiError::RateLimitExceeded { details, .. } = failure.error else {
        panic!("expected the rate limit variant");
    };
    let details = details.unwrap();
    assert_eq!(details.hourly_rate_limit, 3600);
    assert_eq!(details.hourly_rate_limit_remaining, 2456);
    assert_eq!(
        details.hourly_rate_limit_reset,
        OffsetDateTime::from_unix_timestamp(1731011315).unwrap()
    );
}

#[tokio::test]
async fn uniqueness_response_names_the_offending_field() {
    let failure = list_failure(
        422,
        error_body(
            "uniqueness_error",
            "SSH key with the same fingerprint already exists",
            Some(serde_json::json!({"fields": [{"name": "public_key"}]})),
        ),
    )
    .await;

    let ApiError::Uniqueness { details, .. } = failure.error else {
        panic!("expected the uniqueness variant");
    };
    let fields = details.unwrap().fields;
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "public_key");
}

#[tokio::test]
async fn resource_limit_response_names_the_exceeded_limit() {
    let failure = list_failure(
        422,
        error_body(
            "resource_limit_exceeded",
            "project limit exceeded",
            Some(serde_json::json!({"limits": [{"name": "project_limit"}]})),
        ),
    )
    .await;

    let ApiError::ResourceLimitExceeded { details, .. } = failure.error else {
        panic!("expected the resource limit variant");
    };
    assert_eq!(details.unwrap().limits[0].name, "project_limit");
}

#[tokio::test]
async fn invalid_input_response_carries_the_field_reasons() {
    let failure = list_failure(
        422,
        error_body(
            "invalid_input",
            "invalid input in field 'broken_field': is too long",
            Some(serde_json::json!({
                "fields": [{"name": "broken_field", "messages": ["is too long"]}]
            })),
        ),
    )
    .await;

    let ApiError::InvalidInput { details, .. } = failure.error else {
        panic!("expected the invalid input variant");
    };
    let fields = details.unwrap().fields;
    assert_eq!(fields[0].name, "broken_field");
    assert_eq!(fields[0].messages, vec!["is too long".to_string()]);
}

#[tokio::test]
async fn generic_error_responses_map_by_discriminator_and_keep_the_request() {
    let cases = [
        ("forbidden", 403, ErrorCode::Forbidden),
        ("server_error", 500, ErrorCode::ServerError),
        ("service_error", 500, ErrorCode::ServiceError),
        ("not_found", 404, ErrorCode::NotFound),
        ("json_error", 400, ErrorCode::JsonError),
        ("method_not_allowed", 405, ErrorCode::MethodNotAllowed),
    ];

    for (code, status_code, expected) in cases {
        let failure = list_failure(status_code, error_body(code, "some failure", None)).await;
        assert_eq!(failure.error.code(), expected);
        assert_eq!(failure.status_code, status_code);
        assert!(failure.request.url.ends_with("/servers"));
    }
}

#[tokio::test]
async fn unrecognized_discriminator_falls_back_without_failing_the_decode() {
    let failure = list_failure(
        409,
        error_body("timeout_while_waiting", "brand new server-side code", None),
    )
    .await;

    assert_eq!(
        failure.error,
        ApiError::Unknown {
            code: "timeout_while_waiting".to_string(),
            message: "brand new server-side code".to_string()
        }
    );
}

#[tokio::test]
async fn undecodable_error_body_surfaces_as_a_deserialization_failure() {
    let transport = MockTransport::with_raw_body(500, b"<html>gateway exploded</html>");
    let client = test_client(transport);

    let report = client.servers().list().await.unwrap_err();
    assert!(matches!(
        report.current_context(),
        ClientError::ResponseDeserializationFailed
    ));
}
