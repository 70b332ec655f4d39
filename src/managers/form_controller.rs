//! Form controllers for LinkKeeper.
//!
//! Each form holds its own isolated draft plus a submit status. Submission is
//! a single network call; on failure the draft is preserved verbatim so no
//! user input is lost. Only one submission may be in flight per form
//! instance; a second attempt while one is pending is refused client-side.

use tracing::debug;

use crate::services::api_client::ApiGatewayTrait;
use crate::services::session_store::SessionStoreTrait;
use crate::types::auth::Session;
use crate::types::bookmark::{BookmarkRecord, NewBookmark};
use crate::types::errors::FormError;

/// Submit status for a form instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    /// Settled with a success message.
    Succeeded(String),
    /// Settled with an error message; the draft is untouched.
    Failed(String),
}

impl Default for FormStatus {
    fn default() -> Self {
        FormStatus::Idle
    }
}

/// Splits free-text tag input on commas, trimming each segment and dropping
/// empty ones. Duplicates are preserved in entry order; zero tags is valid.
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn looks_like_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

// === AddBookmarkForm ===

/// Trait defining the add-bookmark form interface.
#[allow(async_fn_in_trait)]
pub trait AddBookmarkFormTrait {
    /// Pre-fills the draft from bookmarklet query parameters. Existing draft
    /// text wins over the incoming values.
    fn prefill(&mut self, url: &str, title: &str, description: &str);

    fn status(&self) -> &FormStatus;

    fn is_submitting(&self) -> bool;

    /// Client-side validation: URL and title are the only required fields.
    /// Returns the trimmed, tag-split payload ready for the gateway.
    fn validate(&self) -> Result<NewBookmark, FormError>;

    /// Submits the draft. On success the draft is cleared; on failure it is
    /// preserved verbatim and the server's message is surfaced.
    async fn submit<G: ApiGatewayTrait>(
        &mut self,
        gateway: &G,
        token: Option<&str>,
    ) -> Result<BookmarkRecord, FormError>;
}

/// Draft state for the add-bookmark page.
#[derive(Debug, Default)]
pub struct AddBookmarkForm {
    pub url: String,
    pub title: String,
    pub description: String,
    /// Raw comma-separated tag text as the user typed it.
    pub tags: String,
    status: FormStatus,
}

impl AddBookmarkForm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AddBookmarkFormTrait for AddBookmarkForm {
    fn prefill(&mut self, url: &str, title: &str, description: &str) {
        if self.url.is_empty() {
            self.url = url.to_string();
        }
        if self.title.is_empty() {
            self.title = title.to_string();
        }
        if self.description.is_empty() {
            self.description = description.to_string();
        }
    }

    fn status(&self) -> &FormStatus {
        &self.status
    }

    fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    fn validate(&self) -> Result<NewBookmark, FormError> {
        let url = self.url.trim();
        if url.is_empty() || !looks_like_http_url(url) {
            return Err(FormError::MissingField("URL".to_string()));
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingField("Title".to_string()));
        }
        Ok(NewBookmark {
            url: url.to_string(),
            title: title.to_string(),
            description: self.description.trim().to_string(),
            tags: split_tags(&self.tags),
        })
    }

    async fn submit<G: ApiGatewayTrait>(
        &mut self,
        gateway: &G,
        token: Option<&str>,
    ) -> Result<BookmarkRecord, FormError> {
        if self.is_submitting() {
            return Err(FormError::InFlight);
        }
        let token = match token {
            Some(t) => t,
            None => {
                let err = FormError::NotAuthenticated;
                self.status = FormStatus::Failed(err.user_message());
                return Err(err);
            }
        };
        let payload = match self.validate() {
            Ok(p) => p,
            Err(err) => {
                self.status = FormStatus::Failed(err.user_message());
                return Err(err);
            }
        };

        self.status = FormStatus::Submitting;
        match gateway.create_bookmark(token, &payload).await {
            Ok(record) => {
                debug!(id = %record.id, "bookmark created");
                self.url.clear();
                self.title.clear();
                self.description.clear();
                self.tags.clear();
                self.status =
                    FormStatus::Succeeded("Bookmark added successfully!".to_string());
                Ok(record)
            }
            Err(err) => {
                let err = FormError::from(err);
                self.status = FormStatus::Failed(err.user_message());
                Err(err)
            }
        }
    }
}

// === LoginForm ===

/// Which auth endpoint the form submits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Trait defining the login/register form interface.
#[allow(async_fn_in_trait)]
pub trait LoginFormTrait {
    /// Switches between login and register without losing the draft.
    fn toggle_mode(&mut self);

    fn status(&self) -> &FormStatus;

    fn is_submitting(&self) -> bool;

    /// Submits the credentials. On success the session store is populated and
    /// the session returned to the caller; on failure the store is untouched,
    /// the draft preserved, and the server's message surfaced verbatim.
    async fn submit<G: ApiGatewayTrait, S: SessionStoreTrait>(
        &mut self,
        gateway: &G,
        store: &mut S,
    ) -> Result<Session, FormError>;
}

/// Draft state for the combined login/register page.
#[derive(Debug)]
pub struct LoginForm {
    pub mode: AuthMode,
    /// Only required in Register mode.
    pub name: String,
    pub email: String,
    pub password: String,
    status: FormStatus,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            mode: AuthMode::Login,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            status: FormStatus::Idle,
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        if self.mode == AuthMode::Register && self.name.trim().is_empty() {
            return Err(FormError::MissingField("Name".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(FormError::MissingField("Email".to_string()));
        }
        if self.password.is_empty() {
            return Err(FormError::MissingField("Password".to_string()));
        }
        Ok(())
    }
}

impl LoginFormTrait for LoginForm {
    fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
    }

    fn status(&self) -> &FormStatus {
        &self.status
    }

    fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    async fn submit<G: ApiGatewayTrait, S: SessionStoreTrait>(
        &mut self,
        gateway: &G,
        store: &mut S,
    ) -> Result<Session, FormError> {
        if self.is_submitting() {
            return Err(FormError::InFlight);
        }
        if let Err(err) = self.validate() {
            self.status = FormStatus::Failed(err.user_message());
            return Err(err);
        }

        self.status = FormStatus::Submitting;
        let result = match self.mode {
            AuthMode::Login => gateway.login(self.email.trim(), &self.password).await,
            AuthMode::Register => {
                gateway
                    .register(self.name.trim(), self.email.trim(), &self.password)
                    .await
            }
        };

        match result {
            Ok(session) => {
                store
                    .set_session(&session.token, session.user.clone())
                    .map_err(|e| {
                        let err = FormError::Store(e.to_string());
                        self.status = FormStatus::Failed(err.user_message());
                        err
                    })?;
                debug!(user = %session.user.email, "authenticated");
                let message = match self.mode {
                    AuthMode::Login => "Welcome back!",
                    AuthMode::Register => "Account created successfully!",
                };
                self.status = FormStatus::Succeeded(message.to_string());
                Ok(session)
            }
            Err(err) => {
                let err = FormError::from(err);
                self.status = FormStatus::Failed(err.user_message());
                Err(err)
            }
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}
