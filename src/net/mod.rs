//! Networking: the authenticated HTTP client and API wire models.

pub mod client;
pub mod types;
