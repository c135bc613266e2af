//! civic-server — citizen complaint submission and tracking
//!
//! Citizens submit complaints over HTTP; each one is routed to a department,
//! given a mock priority and reward, and kept in memory. Organizations log
//! in with static credentials and move complaints through statuses.

pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppResult, ServerError};
pub use state::AppState;
pub use store::ComplaintStore;
