//! Popup state types.

// ============================================================================
// Popup State
// ============================================================================

/// Represents the current popup/modal state.
///
/// Only one popup can be active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is displayed.
    #[default]
    None,
    /// Regional entrance picker with the highlighted row.
    NodeSelect { cursor: usize },
    /// UUID reset confirmation.
    ConfirmReset,
    /// Plan browser.
    Plans,
    /// Message/notification popup.
    Message(String),
}

impl PopupState {
    /// Returns `true` if there is an active popup.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Highlighted row of the node picker, if it is open.
    #[must_use]
    pub const fn node_cursor(&self) -> Option<usize> {
        match self {
            Self::NodeSelect { cursor } => Some(*cursor),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_state_variants() {
        assert!(!PopupState::None.is_active());
        assert!(PopupState::NodeSelect { cursor: 0 }.is_active());
        assert!(PopupState::ConfirmReset.is_active());
        assert!(PopupState::Plans.is_active());
        assert!(PopupState::Message("test".to_string()).is_active());

        assert_eq!(PopupState::NodeSelect { cursor: 3 }.node_cursor(), Some(3));
        assert_eq!(PopupState::Plans.node_cursor(), None);
    }
}
