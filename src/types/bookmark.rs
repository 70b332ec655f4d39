use serde::{Deserialize, Serialize};

/// A saved bookmark as returned by the LinkKeeper API.
///
/// The server owns these records; the client holds a cached, possibly-stale copy.
/// `id` and `created_at` are server-assigned and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Payload for creating a new bookmark via `POST /links`.
#[derive(Debug, Clone, Serialize)]
pub struct NewBookmark {
    pub url: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Partial update payload for `PATCH /links/:id`.
///
/// Only fields that are `Some` are serialized, so the server leaves
/// unsupplied fields untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookmarkPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl BookmarkPatch {
    /// Returns true if the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.tags.is_none()
    }
}
