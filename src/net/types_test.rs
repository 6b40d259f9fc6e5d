use super::*;
use serde_json::json;

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_with_data_unwraps() {
    let env = Envelope::<TokenPair>::from_value(json!({
        "data": { "accessToken": "a", "refreshToken": "r" }
    }))
    .unwrap();
    let pair = env.into_result().unwrap();
    assert_eq!(pair.access_token.as_deref(), Some("a"));
    assert_eq!(pair.refresh_token.as_deref(), Some("r"));
}

#[test]
fn envelope_without_data_is_request_failed_with_message() {
    let env = Envelope::<TokenPair>::from_value(json!({ "message": "Invalid credentials" })).unwrap();
    assert_eq!(
        env.into_result(),
        Err(ApiError::RequestFailed { message: Some("Invalid credentials".to_owned()) })
    );
}

#[test]
fn envelope_with_null_data_is_request_failed() {
    let env = Envelope::<TokenPair>::from_value(json!({ "data": null })).unwrap();
    assert_eq!(env.into_result(), Err(ApiError::RequestFailed { message: None }));
}

#[test]
fn envelope_with_wrong_shape_is_request_failed() {
    let err = Envelope::<FirebaseToken>::from_value(json!({ "data": 42, "message": "odd" })).unwrap_err();
    assert_eq!(err, ApiError::RequestFailed { message: Some("odd".to_owned()) });
}

#[test]
fn envelope_from_non_object_body_is_request_failed() {
    let err = Envelope::<TokenPair>::from_value(json!("oops")).unwrap_err();
    assert_eq!(err, ApiError::RequestFailed { message: None });
}

// =============================================================
// error_message
// =============================================================

#[test]
fn error_message_reads_top_level_message() {
    assert_eq!(error_message(&json!({ "message": "Link expired" })).as_deref(), Some("Link expired"));
}

#[test]
fn error_message_reads_nested_error_message() {
    let body = json!({ "error": { "message": "Invalid token" } });
    assert_eq!(error_message(&body).as_deref(), Some("Invalid token"));
}

#[test]
fn error_message_reads_bare_error_string() {
    assert_eq!(error_message(&json!({ "error": "Not found" })).as_deref(), Some("Not found"));
}

#[test]
fn error_message_absent_for_empty_body() {
    assert_eq!(error_message(&serde_json::Value::Null), None);
}

// =============================================================
// AccountRecord
// =============================================================

#[test]
fn account_record_deserializes_camel_case() {
    let record: AccountRecord = serde_json::from_value(json!({
        "email": "ada@example.com",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "organizationInfo": [{
            "id": "org-1",
            "name": "Analytical",
            "logoUrl": "https://example.com/logo.png",
            "status": "ACTIVE",
            "organizationRole": "ORGANIZATION_ADMIN"
        }]
    }))
    .unwrap();
    assert_eq!(record.first_name, "Ada");
    assert_eq!(record.role, None);
    assert_eq!(record.organization_info.len(), 1);
    assert_eq!(record.organization_info[0].organization_role.as_deref(), Some("ORGANIZATION_ADMIN"));
}

#[test]
fn account_record_tolerates_missing_fields() {
    let record: AccountRecord = serde_json::from_value(json!({ "role": "SUPER_ADMIN" })).unwrap();
    assert_eq!(record.role.as_deref(), Some("SUPER_ADMIN"));
    assert!(record.email.is_empty());
    assert!(record.organization_info.is_empty());
}
