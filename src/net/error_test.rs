use super::*;

#[test]
fn display_includes_server_message_when_present() {
    let err = ApiError::RequestFailed { message: Some("Email not found".to_owned()) };
    assert_eq!(err.to_string(), "request failed: Email not found");
    assert_eq!(ApiError::RequestFailed { message: None }.to_string(), "request failed");
}

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::AuthExpired { message: Some("Invalid credentials".to_owned()) };
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn user_message_uses_error_text_without_server_message() {
    assert_eq!(ApiError::Transport("network down".to_owned()).user_message(), "network down");
    assert_eq!(ApiError::InvalidInput("token is required".to_owned()).user_message(), "token is required");
}

#[test]
fn user_message_falls_back_to_fixed_text() {
    assert_eq!(ApiError::RequestFailed { message: None }.user_message(), FALLBACK_ERROR_MESSAGE);
    assert_eq!(ApiError::RequestFailed { message: Some("  ".to_owned()) }.user_message(), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn storage_error_converts() {
    let err: ApiError = StorageError::Unavailable.into();
    assert_eq!(err, ApiError::Storage(StorageError::Unavailable));
    assert_eq!(err.user_message(), "storage is unavailable");
}
