use std::fmt;

// === ApiError ===

/// Errors surfaced by the API gateway client.
///
/// A transport failure (the request never reached or returned from the
/// server) is `Connectivity`; everything else carries the server-provided
/// message verbatim, classified by HTTP status.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The request never completed (DNS, connect, or read failure).
    Connectivity(String),
    /// Missing, invalid, or expired token (401/403).
    Auth(String),
    /// The server rejected malformed input (other 4xx).
    Validation(String),
    /// The target record no longer exists (404).
    NotFound(String),
    /// The server reported a failure it did not classify (5xx or malformed body).
    Server(String),
}

impl ApiError {
    /// The message to show the user.
    ///
    /// Connectivity failures get a generic retry-suggesting message; all
    /// other variants surface the server's message verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Connectivity(_) => "Network error. Please try again.".to_string(),
            ApiError::Auth(msg)
            | ApiError::Validation(msg)
            | ApiError::NotFound(msg)
            | ApiError::Server(msg) => msg.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Connectivity(msg) => write!(f, "Network error: {}", msg),
            ApiError::Auth(msg) => write!(f, "Authentication error: {}", msg),
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Server(msg) => write!(f, "Server error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

// === SessionError ===

/// Errors related to persisting the local session.
#[derive(Debug)]
pub enum SessionError {
    /// An I/O error occurred while reading or writing the session file.
    IoError(String),
    /// Failed to serialize or deserialize the session.
    SerializationError(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::IoError(msg) => write!(f, "Session I/O error: {}", msg),
            SessionError::SerializationError(msg) => {
                write!(f, "Session serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SessionError {}

// === FormError ===

/// Errors raised by form controllers before or during submission.
#[derive(Debug)]
pub enum FormError {
    /// A required field is empty or malformed.
    MissingField(String),
    /// No stored token; the user must log in first.
    NotAuthenticated,
    /// A submission is already in flight for this form instance.
    InFlight,
    /// The gateway call failed.
    Api(ApiError),
    /// Persisting the session after login/registration failed.
    Store(String),
}

impl FormError {
    /// The message to show next to the form.
    pub fn user_message(&self) -> String {
        match self {
            FormError::MissingField(field) => format!("{} is required", field),
            FormError::NotAuthenticated => "Please login to add bookmarks".to_string(),
            FormError::InFlight => "Submission already in progress".to_string(),
            FormError::Api(err) => err.user_message(),
            FormError::Store(msg) => msg.clone(),
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingField(field) => write!(f, "Missing required field: {}", field),
            FormError::NotAuthenticated => write!(f, "Not authenticated"),
            FormError::InFlight => write!(f, "Submission already in progress"),
            FormError::Api(err) => write!(f, "API error: {}", err),
            FormError::Store(msg) => write!(f, "Session store error: {}", msg),
        }
    }
}

impl std::error::Error for FormError {}

impl From<ApiError> for FormError {
    fn from(err: ApiError) -> Self {
        FormError::Api(err)
    }
}
