//! Popup UI components.
//!
//! Popups are modal overlays drawn on top of the dashboard. Only one is open
//! at a time and it owns keyboard input until dismissed.

pub mod confirm;
pub mod message;
pub mod node_select;
pub mod plans;

pub use confirm::render as render_confirm_reset;
pub use message::render as render_message_popup;
pub use node_select::render as render_node_select;
pub use plans::render as render_plans;
