//! Error handling tests for zarinpal

use zarinpal::{status, ZarinpalClient, ZarinpalConfig, ZarinpalError};

#[test]
fn test_gateway_error_is_bare_code() {
    for code in [-9, -54, 0, 101] {
        let error = ZarinpalError::gateway(code);
        assert_eq!(
            error.to_string(),
            code.to_string(),
            "Gateway error message MUST be the stringified code"
        );
        assert_eq!(error.status_code(), Some(code));
    }
}

#[test]
fn test_gateway_code_can_be_described() {
    let error = ZarinpalError::gateway(-11);
    let text = error.status_code().and_then(status::describe);
    assert_eq!(text, Some("Terminal is not active"));
}

#[test]
fn test_invalid_response_error() {
    let error = ZarinpalError::InvalidResponse;
    assert_eq!(error.to_string(), "invalid JSON response");
    assert_eq!(error.status_code(), None);
}

#[test]
fn test_serialization_error_from_serde() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = ZarinpalError::from(source);

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("JSON error"),
        "Error message MUST contain 'JSON error' - actual: {}",
        error_msg
    );
    assert!(!error.is_validation());
}

#[test]
fn test_construction_errors() {
    let error = ZarinpalClient::new("x".repeat(35), false).unwrap_err();
    assert!(error.is_validation());
    assert_eq!(error.to_string(), "merchant_id must be 36 characters");

    let error = ZarinpalClient::with_config(
        ZarinpalConfig::new("x".repeat(36), false).with_api_endpoint("localhost"),
    )
    .unwrap_err();
    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Configuration error"),
        "Error message MUST contain 'Configuration error' - actual: {}",
        error_msg
    );
}

#[test]
fn test_construction_accepts_any_36_characters() {
    let client = ZarinpalClient::new("x".repeat(36), true).unwrap();
    assert!(client.is_sandbox());

    let client = ZarinpalClient::new("1344b5d4-0048-11e8-94db-005056a205be", false).unwrap();
    assert_eq!(client.merchant_id(), "1344b5d4-0048-11e8-94db-005056a205be");
}
