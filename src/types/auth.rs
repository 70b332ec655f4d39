use serde::{Deserialize, Serialize};

/// Display fields for the logged-in user, as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    pub email: String,
}

/// An authenticated session: opaque bearer token plus the user profile.
///
/// The server is the sole authority on token validity; no expiry is
/// tracked client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}
