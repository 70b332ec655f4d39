// LinkKeeper services
// Services provide the supporting functionality: the HTTP gateway, session persistence, and the bookmarklet template.

pub mod api_client;
pub mod bookmarklet;
pub mod session_store;
