use linkkeeper_client::types::errors::*;

// === ApiError Tests ===

#[test]
fn api_error_display_variants() {
    assert_eq!(
        ApiError::Connectivity("connection refused".to_string()).to_string(),
        "Network error: connection refused"
    );
    assert_eq!(
        ApiError::Auth("token expired".to_string()).to_string(),
        "Authentication error: token expired"
    );
    assert_eq!(
        ApiError::Validation("url is required".to_string()).to_string(),
        "Validation error: url is required"
    );
    assert_eq!(
        ApiError::NotFound("no such bookmark".to_string()).to_string(),
        "Not found: no such bookmark"
    );
    assert_eq!(
        ApiError::Server("boom".to_string()).to_string(),
        "Server error: boom"
    );
}

#[test]
fn api_error_connectivity_user_message_is_generic() {
    let err = ApiError::Connectivity("dns lookup failed: host unreachable".to_string());
    assert_eq!(err.user_message(), "Network error. Please try again.");
}

#[test]
fn api_error_other_user_messages_are_verbatim() {
    assert_eq!(
        ApiError::Auth("Invalid credentials".to_string()).user_message(),
        "Invalid credentials"
    );
    assert_eq!(
        ApiError::Validation("Title is required".to_string()).user_message(),
        "Title is required"
    );
    assert_eq!(
        ApiError::NotFound("Bookmark not found".to_string()).user_message(),
        "Bookmark not found"
    );
}

#[test]
fn api_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(ApiError::Server("x".to_string()));
    assert!(err.source().is_none());
}

// === SessionError Tests ===

#[test]
fn session_error_display_variants() {
    assert_eq!(
        SessionError::IoError("permission denied".to_string()).to_string(),
        "Session I/O error: permission denied"
    );
    assert_eq!(
        SessionError::SerializationError("bad json".to_string()).to_string(),
        "Session serialization error: bad json"
    );
}

// === FormError Tests ===

#[test]
fn form_error_display_variants() {
    assert_eq!(
        FormError::MissingField("Title".to_string()).to_string(),
        "Missing required field: Title"
    );
    assert_eq!(FormError::NotAuthenticated.to_string(), "Not authenticated");
    assert_eq!(
        FormError::InFlight.to_string(),
        "Submission already in progress"
    );
    assert_eq!(
        FormError::Store("disk full".to_string()).to_string(),
        "Session store error: disk full"
    );
}

#[test]
fn form_error_wraps_api_error() {
    let err = FormError::from(ApiError::Auth("Invalid credentials".to_string()));
    assert_eq!(err.to_string(), "API error: Authentication error: Invalid credentials");
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn form_error_user_messages() {
    assert_eq!(
        FormError::MissingField("URL".to_string()).user_message(),
        "URL is required"
    );
    assert_eq!(
        FormError::NotAuthenticated.user_message(),
        "Please login to add bookmarks"
    );
}
