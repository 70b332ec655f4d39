// LinkKeeper state managers
// Managers handle the client's stateful surfaces: the dashboard collection and the form drafts.

pub mod collection_manager;
pub mod form_controller;
