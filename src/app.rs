//! App core for the LinkKeeper client.
//!
//! Central struct wiring the session store, API client, and view-state
//! managers. A rendering layer constructs one `App` and builds page-level
//! managers from it as the user navigates.

use crate::config::Config;
use crate::managers::collection_manager::CollectionManager;
use crate::managers::form_controller::{AddBookmarkForm, LoginForm};
use crate::services::api_client::ApiClient;
use crate::services::bookmarklet;
use crate::services::session_store::{SessionStore, SessionStoreTrait};
use crate::types::errors::SessionError;

/// Central application struct holding the session store and API client.
pub struct App {
    pub config: Config,
    pub session_store: SessionStore,
    api: ApiClient,
}

impl App {
    /// Creates a new App, loading any persisted session from disk.
    ///
    /// `session_path_override` routes session persistence to a custom file
    /// (used by tests); `None` uses the platform config directory.
    pub fn new(
        config: Config,
        session_path_override: Option<String>,
    ) -> Result<Self, SessionError> {
        let api = ApiClient::new(&config.api_base_url);
        let mut session_store = SessionStore::new(session_path_override);
        session_store.load()?;

        Ok(Self {
            config,
            session_store,
            api,
        })
    }

    pub fn api_client(&self) -> &ApiClient {
        &self.api
    }

    /// Builds the dashboard's view-state manager over the stored token.
    pub fn collection_manager(&self) -> CollectionManager<ApiClient> {
        let token = self.session_store.get_token().map(str::to_string);
        CollectionManager::new(self.api.clone(), token)
    }

    /// Fresh draft for the add-bookmark page.
    pub fn add_bookmark_form(&self) -> AddBookmarkForm {
        AddBookmarkForm::new()
    }

    /// Fresh draft for the login/register page.
    pub fn login_form(&self) -> LoginForm {
        LoginForm::new()
    }

    /// The bookmarklet script for this deployment's app origin.
    pub fn bookmarklet_code(&self) -> String {
        bookmarklet::bookmarklet_code(&self.config.app_url)
    }

    /// Logout: clears the persisted session.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.session_store.clear_session()
    }
}
