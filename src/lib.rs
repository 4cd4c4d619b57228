//! Client library for the AICO project-management API.
//!
//! DESIGN
//! ======
//! The library mirrors the layers the app stacks on top of the API:
//! `state` holds session and workspace-selection state, `net` owns the
//! authenticated HTTP client and wire models, and `api` exposes typed
//! resource operations. `storage` is the persisted key-value store the
//! session survives restarts through. The CLI binary composes these
//! per invocation: restore session, resolve a workspace, run a command.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod storage;

pub use config::Config;
pub use error::ClientError;
pub use net::client::ApiClient;
