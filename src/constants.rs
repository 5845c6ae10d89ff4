//! Application constants for the dashboard TUI.
//!
//! Centralized constants for UI dimensions, display symbols and timing.

// ============================================================================
// Timing
// ============================================================================

/// Main loop tick in milliseconds; toasts expire and the screen redraws on each tick.
pub const TICK_RATE: u64 = 100;

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer key hint line (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the subscription panel (in rows).
///
/// Plan, expiry, usage bar, copy URL and the client link line, plus borders.
pub const SUBSCRIPTION_PANEL_HEIGHT: u16 = 12;

/// Width of the traffic usage bar (in cells), excluding the label.
pub const USAGE_BAR_WIDTH: u16 = 30;

// ============================================================================
// Display Symbols
// ============================================================================

/// Marker for a selected entrance in the node picker.
pub const CHECKED_SYMBOL: &str = "[x]";

/// Marker for an unselected entrance in the node picker.
pub const UNCHECKED_SYMBOL: &str = "[ ]";

/// Bullet used in lists.
pub const BULLET: &str = "•";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_markers_have_equal_width() {
        assert_eq!(CHECKED_SYMBOL.len(), UNCHECKED_SYMBOL.len());
    }
}
