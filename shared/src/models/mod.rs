//! Data models
//!
//! Shared between civic-server and frontend (via API).
//! Request payloads tolerate absent and `null` fields; presence checks
//! happen in the HTTP layer.

pub mod complaint;
pub mod organization;

// Re-exports
pub use complaint::*;
pub use organization::*;
