//! LinkKeeper client core — the engine behind the bookmark manager's web client.
//!
//! This library crate exposes the session store, API gateway client, and
//! view-state managers; any rendering layer observes them through snapshots
//! and subscriptions.

pub mod app;
pub mod config;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
