//! Reusable UI components for the dashboard.
//!
//! Components are stateless: they take what they draw as arguments and never
//! touch application state.
//!
//! - [`toast`] - Toast notification overlay for non-blocking messages
//! - [`usage_bar`] - Traffic usage bar with its percentage label

pub mod toast;
pub mod usage_bar;

pub use toast::render_toast;
pub use usage_bar::usage_bar_line;
