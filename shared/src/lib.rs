//! Shared types for the civic complaint service
//!
//! Wire models used by the HTTP server and by any client talking to it.
//! All JSON is camelCase to match the web frontend.

pub mod models;
pub mod util;

// Re-exports
pub use models::{
    Complaint, ComplaintSubmission, MessageResponse, OrgCredential, OrgLoginRequest,
    OrgLoginResponse, StatusUpdateRequest,
};
pub use serde::{Deserialize, Serialize};
