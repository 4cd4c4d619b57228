//! Typed resource operations over the REST API.
//!
//! One module per resource. Creates return the created object (callers
//! prepend it to their lists); updates and deletes return the backend's
//! `{"message"}` acknowledgement, after which callers refetch.

pub mod activities;
pub mod analytics;
pub mod notes;
pub mod projects;
pub mod requests;
pub mod tasks;
pub mod team;
pub mod users;
pub mod workspaces;
