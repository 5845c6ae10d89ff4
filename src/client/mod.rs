//! HTTP clients for the subscription backend.
//!
//! - [`http`] - Shared `reqwest` client configuration
//! - [`session`] - Session token ownership and persistence
//! - [`api`] - Typed endpoint calls

pub mod api;
pub mod http;
pub mod session;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{ApiClient, Registration};
pub use http::HttpClient;
pub use session::SessionContext;
