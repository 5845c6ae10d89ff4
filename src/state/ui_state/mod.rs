//! UI state management for the dashboard.
//!
//! This module manages UI presentation concerns including:
//! - Panel focus (which panel is active)
//! - Popup/modal state
//! - Toast notifications
//! - UUID visibility and the plan browser period

mod popups;
mod toast;

use std::time::{Duration, Instant};

use crate::domain::BillingPeriod;

pub use popups::PopupState;
pub use toast::{COPY_ACK_DURATION, TOAST_DURATION, Toast};

// ============================================================================
// Focus
// ============================================================================

/// Represents which dashboard panel currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Subscription,
    Knowledge,
    Tickets,
    Account,
}

impl Focus {
    /// Cycles to the next focus target.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Subscription => Self::Knowledge,
            Self::Knowledge => Self::Tickets,
            Self::Tickets => Self::Account,
            Self::Account => Self::Subscription,
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// UI state: focus, popup state, toast and view flags.
#[derive(Debug, Default)]
pub struct UiState {
    /// Which panel currently has focus.
    pub focus: Focus,
    /// Current popup/modal state.
    pub popup_state: PopupState,
    /// Transient notification overlay.
    pub toast: Toast,
    /// Whether the account UUID is shown in clear text.
    pub uuid_revealed: bool,
    /// Period listed by the plan browser.
    pub billing_period: BillingPeriod,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    // ========================================================================
    // Popup Management
    // ========================================================================

    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    pub fn open_node_select(&mut self) {
        self.popup_state = PopupState::NodeSelect { cursor: 0 };
    }

    pub fn open_confirm_reset(&mut self) {
        self.popup_state = PopupState::ConfirmReset;
    }

    pub fn open_plans(&mut self) {
        self.popup_state = PopupState::Plans;
    }

    /// Moves the node picker cursor by `delta`, wrapping within `len` rows.
    pub fn move_node_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        if let PopupState::NodeSelect { cursor } = &mut self.popup_state {
            let len = len as isize;
            *cursor = (*cursor as isize + delta).rem_euclid(len) as usize;
        }
    }

    // ========================================================================
    // View Flags
    // ========================================================================

    pub fn toggle_uuid(&mut self) {
        self.uuid_revealed = !self.uuid_revealed;
    }

    pub fn toggle_billing_period(&mut self) {
        self.billing_period = self.billing_period.toggle();
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast for `duration`, replacing any pending one.
    pub fn show_toast(&mut self, message: impl Into<String>, duration: Duration) {
        self.toast.show(message, duration, Instant::now());
    }

    /// Drops an expired toast. Returns `true` if one was removed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        self.toast.expire(now)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_behavior() {
        assert_eq!(Focus::default(), Focus::Subscription);
        let mut focus = Focus::Subscription;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Subscription);
        assert_eq!(Focus::Tickets.next(), Focus::Account);
    }

    #[test]
    fn test_ui_state_popup_lifecycle() {
        let mut ui = UiState::new();
        assert!(!ui.has_active_popup());

        ui.show_message("Test");
        assert!(ui.has_active_popup());
        ui.dismiss_popup();
        assert!(!ui.has_active_popup());

        ui.open_confirm_reset();
        assert_eq!(ui.popup_state, PopupState::ConfirmReset);
    }

    #[test]
    fn test_node_cursor_wraps() {
        let mut ui = UiState::new();
        ui.open_node_select();
        ui.move_node_cursor(-1, 6);
        assert_eq!(ui.popup_state.node_cursor(), Some(5));
        ui.move_node_cursor(1, 6);
        assert_eq!(ui.popup_state.node_cursor(), Some(0));

        // No effect when another popup is open.
        ui.open_plans();
        ui.move_node_cursor(1, 6);
        assert_eq!(ui.popup_state, PopupState::Plans);
    }

    #[test]
    fn test_view_flags() {
        let mut ui = UiState::new();
        assert!(!ui.uuid_revealed);
        ui.toggle_uuid();
        assert!(ui.uuid_revealed);

        assert_eq!(ui.billing_period, BillingPeriod::Monthly);
        ui.toggle_billing_period();
        assert_eq!(ui.billing_period, BillingPeriod::Yearly);
    }

    #[test]
    fn test_toast_lifecycle() {
        let mut ui = UiState::new();
        ui.show_toast("Hello", Duration::from_millis(50));
        assert!(ui.toast.is_visible(Instant::now()));
        assert!(ui.expire_toast(Instant::now() + Duration::from_secs(1)));
    }
}
