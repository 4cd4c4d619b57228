//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `workspace`, `settings`) so
//! callers depend on small focused models. Only the session store needs
//! interior mutability; it is shared with the HTTP client for token
//! injection and rotation.

pub mod session;
pub mod settings;
pub mod workspace;
