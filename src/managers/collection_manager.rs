//! Bookmark collection view-state manager for LinkKeeper.
//!
//! Owns the in-memory list of bookmark records for the current session,
//! orchestrates load/update/delete against the API gateway, and derives a
//! filtered view from a live search term. The manager is a plain state
//! machine exposing a snapshot plus subscribe/notify, so any rendering layer
//! (web view, CLI, test harness) can observe it.
//!
//! All shared state sits behind a `Mutex` that is never held across an
//! await: each completed network result is applied to whichever state
//! exists at completion time (last-write-wins per record id).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::debug;

use crate::services::api_client::ApiGatewayTrait;
use crate::types::bookmark::{BookmarkPatch, BookmarkRecord};
use crate::types::errors::ApiError;

/// Message shown when the stored token is rejected or absent.
pub const AUTH_FAILED_MESSAGE: &str = "Authentication failed. Please login again.";

/// Lifecycle phase of the collection view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// No token; terminal until an external login.
    Unauthenticated,
    /// Token present, profile check or list fetch in flight.
    Loading,
    /// List loaded, zero or one modal open.
    Ready,
    /// A fetch failed; the manager may still hold a stale list.
    Error,
}

/// The at-most-one open modal: an edit target or a delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ModalTarget {
    Edit(String),
    ConfirmDelete(String),
}

/// Immutable view of the collection state handed to observers.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionSnapshot {
    pub phase: Phase,
    pub records: Vec<BookmarkRecord>,
    pub search_term: String,
    pub error: Option<String>,
    pub modal: Option<ModalTarget>,
}

/// Returns exactly the records whose title, description, or any tag contains
/// `term` as a case-insensitive substring, preserving order. An empty term
/// returns the collection unchanged. Pure function of its inputs.
pub fn filter_records(records: &[BookmarkRecord], term: &str) -> Vec<BookmarkRecord> {
    if term.is_empty() {
        return records.to_vec();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|b| {
            b.title.to_lowercase().contains(&needle)
                || b.description.to_lowercase().contains(&needle)
                || b.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

struct ViewState {
    phase: Phase,
    records: Vec<BookmarkRecord>,
    search_term: String,
    error: Option<String>,
    modal: Option<ModalTarget>,
}

type Listener = Arc<dyn Fn(&CollectionSnapshot) + Send + Sync>;

/// Trait defining the collection manager interface.
#[allow(async_fn_in_trait)]
pub trait CollectionManagerTrait {
    /// Returns a copy of the current view state.
    fn snapshot(&self) -> CollectionSnapshot;

    /// Registers an observer called after every state change. Returns an id
    /// usable with `unsubscribe`.
    fn subscribe<F>(&self, listener: F) -> u64
    where
        F: Fn(&CollectionSnapshot) + Send + Sync + 'static;

    /// Removes an observer. Returns false if the id was not registered.
    fn unsubscribe(&self, id: u64) -> bool;

    /// Mount sequence: verify the token via the profile endpoint, then fetch
    /// the bookmark list. Without a token the view stays Unauthenticated.
    ///
    /// An auth-check failure enters Error without attempting the list fetch;
    /// a list failure enters Error leaving the collection as it was (empty
    /// on first load).
    async fn initialize(&self) -> Result<(), ApiError>;

    /// Re-fetches the list (used after an external create, or for explicit
    /// refresh). Replacing the collection is the only way a deleted record
    /// may reappear.
    async fn reload(&self) -> Result<(), ApiError>;

    /// Updates the live search term. No network traffic; the filtered view
    /// is recomputed on demand.
    fn set_search_term(&self, term: &str);

    /// The records matching the current search term, in collection order.
    fn filtered(&self) -> Vec<BookmarkRecord>;

    /// Opens the edit modal for `id`, returning the current record snapshot
    /// as form defaults. Refused (None) while any modal is open or if the id
    /// is unknown. Purely local.
    fn request_edit(&self, id: &str) -> Option<BookmarkRecord>;

    /// Opens the delete confirmation for `id`. Refused while any modal is
    /// open or if the id is unknown. Does not touch the collection.
    fn request_delete(&self, id: &str) -> bool;

    /// Dismisses whichever modal is open.
    fn cancel_modal(&self);

    /// Performs the delete against the gateway. On success the record leaves
    /// the collection immediately and the confirmation target closes; on
    /// failure the record and the target stay so the user may retry or cancel.
    async fn confirm_delete(&self, id: &str) -> Result<(), ApiError>;

    /// Submits a partial edit. On success the stored record is replaced with
    /// the server's canonical version (tolerating server-side normalization)
    /// and the edit target closes; on failure the target stays open so the
    /// user can retry without re-entering data.
    async fn submit_edit(
        &self,
        id: &str,
        patch: BookmarkPatch,
    ) -> Result<BookmarkRecord, ApiError>;
}

/// View-state manager generic over the gateway so tests can inject an
/// in-memory implementation.
pub struct CollectionManager<G> {
    gateway: G,
    token: Option<String>,
    state: Mutex<ViewState>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener_id: AtomicU64,
}

impl<G: ApiGatewayTrait> CollectionManager<G> {
    /// Creates a manager for the given gateway and session token (read once
    /// from the injected session context, as the dashboard does on mount).
    pub fn new(gateway: G, token: Option<String>) -> Self {
        let phase = if token.is_some() {
            Phase::Loading
        } else {
            Phase::Unauthenticated
        };

        Self {
            gateway,
            token,
            state: Mutex::new(ViewState {
                phase,
                records: Vec::new(),
                search_term: String::new(),
                error: None,
                modal: None,
            }),
            listeners: Mutex::new(Vec::new()),
            next_listener_id: AtomicU64::new(1),
        }
    }

    /// Invokes every registered listener with a fresh snapshot. The listener
    /// list is cloned out first so a callback may re-enter the manager
    /// (search, subscribe, unsubscribe) without holding the lock.
    fn notify(&self) {
        let snapshot = self.snapshot();
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    async fn load_list(&self, token: &str) -> Result<(), ApiError> {
        match self.gateway.list_bookmarks(token).await {
            Ok(list) => {
                let mut state = self.state.lock().unwrap();
                state.records = dedupe_by_id(list);
                state.phase = Phase::Ready;
                state.error = None;
                drop(state);
                self.notify();
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, "list fetch failed");
                let mut state = self.state.lock().unwrap();
                state.phase = Phase::Error;
                state.error = Some(err.user_message());
                drop(state);
                self.notify();
                Err(err)
            }
        }
    }

    /// Records an operation failure: the newest error message replaces any
    /// prior one; the modal (if any) is left untouched.
    fn apply_failure(&self, err: &ApiError) {
        {
            let mut state = self.state.lock().unwrap();
            state.phase = Phase::Error;
            state.error = Some(err.user_message());
        }
        self.notify();
    }
}

impl<G: ApiGatewayTrait> CollectionManagerTrait for CollectionManager<G> {
    fn snapshot(&self) -> CollectionSnapshot {
        let state = self.state.lock().unwrap();
        CollectionSnapshot {
            phase: state.phase,
            records: state.records.clone(),
            search_term: state.search_term.clone(),
            error: state.error.clone(),
            modal: state.modal.clone(),
        }
    }

    fn subscribe<F>(&self, listener: F) -> u64
    where
        F: Fn(&CollectionSnapshot) + Send + Sync + 'static,
    {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .unwrap()
            .push((id, Arc::new(listener)));
        id
    }

    fn unsubscribe(&self, id: u64) -> bool {
        let mut listeners = self.listeners.lock().unwrap();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    async fn initialize(&self) -> Result<(), ApiError> {
        let token = match self.token.clone() {
            Some(t) => t,
            None => {
                let mut state = self.state.lock().unwrap();
                state.phase = Phase::Unauthenticated;
                drop(state);
                self.notify();
                return Ok(());
            }
        };

        {
            let mut state = self.state.lock().unwrap();
            state.phase = Phase::Loading;
            state.error = None;
        }
        self.notify();

        if let Err(err) = self.gateway.fetch_profile(&token).await {
            debug!(error = %err, "auth check failed");
            let mut state = self.state.lock().unwrap();
            state.phase = Phase::Error;
            state.error = Some(match err {
                ApiError::Auth(_) => AUTH_FAILED_MESSAGE.to_string(),
                ref other => other.user_message(),
            });
            drop(state);
            self.notify();
            return Err(err);
        }

        self.load_list(&token).await
    }

    async fn reload(&self) -> Result<(), ApiError> {
        let token = match self.token.clone() {
            Some(t) => t,
            None => {
                let mut state = self.state.lock().unwrap();
                state.phase = Phase::Unauthenticated;
                drop(state);
                self.notify();
                return Ok(());
            }
        };
        self.load_list(&token).await
    }

    fn set_search_term(&self, term: &str) {
        {
            let mut state = self.state.lock().unwrap();
            state.search_term = term.to_string();
        }
        self.notify();
    }

    fn filtered(&self) -> Vec<BookmarkRecord> {
        let state = self.state.lock().unwrap();
        filter_records(&state.records, &state.search_term)
    }

    fn request_edit(&self, id: &str) -> Option<BookmarkRecord> {
        let mut state = self.state.lock().unwrap();
        if state.modal.is_some() {
            return None;
        }
        let record = state.records.iter().find(|b| b.id == id)?.clone();
        state.modal = Some(ModalTarget::Edit(id.to_string()));
        drop(state);
        self.notify();
        Some(record)
    }

    fn request_delete(&self, id: &str) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.modal.is_some() || !state.records.iter().any(|b| b.id == id) {
            return false;
        }
        state.modal = Some(ModalTarget::ConfirmDelete(id.to_string()));
        drop(state);
        self.notify();
        true
    }

    fn cancel_modal(&self) {
        {
            let mut state = self.state.lock().unwrap();
            state.modal = None;
        }
        self.notify();
    }

    async fn confirm_delete(&self, id: &str) -> Result<(), ApiError> {
        let token = match self.token.clone() {
            Some(t) => t,
            None => {
                let err = ApiError::Auth(AUTH_FAILED_MESSAGE.to_string());
                self.apply_failure(&err);
                return Err(err);
            }
        };

        match self.gateway.delete_bookmark(&token, id).await {
            Ok(()) => {
                let mut state = self.state.lock().unwrap();
                state.records.retain(|b| b.id != id);
                if state.modal == Some(ModalTarget::ConfirmDelete(id.to_string())) {
                    state.modal = None;
                }
                state.error = None;
                state.phase = Phase::Ready;
                drop(state);
                self.notify();
                Ok(())
            }
            Err(err) => {
                debug!(%id, error = %err, "delete failed");
                self.apply_failure(&err);
                Err(err)
            }
        }
    }

    async fn submit_edit(
        &self,
        id: &str,
        patch: BookmarkPatch,
    ) -> Result<BookmarkRecord, ApiError> {
        let token = match self.token.clone() {
            Some(t) => t,
            None => {
                let err = ApiError::Auth(AUTH_FAILED_MESSAGE.to_string());
                self.apply_failure(&err);
                return Err(err);
            }
        };

        match self.gateway.update_bookmark(&token, id, &patch).await {
            Ok(canonical) => {
                let mut state = self.state.lock().unwrap();
                if let Some(slot) = state.records.iter_mut().find(|b| b.id == id) {
                    *slot = canonical.clone();
                }
                if state.modal == Some(ModalTarget::Edit(id.to_string())) {
                    state.modal = None;
                }
                state.error = None;
                state.phase = Phase::Ready;
                drop(state);
                self.notify();
                Ok(canonical)
            }
            Err(err) => {
                debug!(%id, error = %err, "edit failed");
                self.apply_failure(&err);
                Err(err)
            }
        }
    }
}

/// Drops records whose id was already seen, keeping the first occurrence.
/// The collection view never holds two records with the same identifier.
fn dedupe_by_id(list: Vec<BookmarkRecord>) -> Vec<BookmarkRecord> {
    let mut seen = std::collections::HashSet::new();
    list.into_iter()
        .filter(|b| seen.insert(b.id.clone()))
        .collect()
}
