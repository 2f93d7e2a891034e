//! Admission request validation (C4) — the structured per-field errors
//! supplement from `original_source/`'s `common/errs`, testable without a
//! live store since `validator::Validate` runs before anything touches IO.

use concert_tickets::admission::types::CreateOrderRequest;
use validator::Validate;

fn request(name: &str, email: &str) -> CreateOrderRequest {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "email": email,
        "category_id": 1,
    }))
    .expect("request deserializes")
}

#[test]
fn valid_request_passes() {
    assert!(request("Jane", "jane@example.com").validate().is_ok());
}

#[test]
fn blank_name_fails_validation() {
    let errors = request("", "jane@example.com").validate().unwrap_err();
    assert!(errors.field_errors().contains_key("name"));
}

#[test]
fn malformed_email_fails_validation() {
    let errors = request("Jane", "not-an-email").validate().unwrap_err();
    assert!(errors.field_errors().contains_key("email"));
}
