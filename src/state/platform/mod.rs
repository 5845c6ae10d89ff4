//! Platform-specific abstractions for cross-platform functionality.
//!
//! - [`clipboard`] - Cross-platform clipboard access
//! - [`paths`] - Configuration and data directory paths

pub mod clipboard;
pub mod paths;

pub use clipboard::copy_text_async;
