//! Theme and styling constants for the dashboard TUI.
//!
//! A small ANSI palette so the dashboard follows the terminal's own colors.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Secondary accent color - client link labels.
pub const SECONDARY_COLOR: Color = Color::Blue;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Accent color for prices and balances.
pub const ACCENT_COLOR: Color = Color::Magenta;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for the row under the cursor in lists.
pub const HIGHLIGHT_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

/// Style for field labels in panels.
pub const LABEL_STYLE: Style = Style::new().fg(MUTED_COLOR);

/// Style for key names in hint lines.
pub const KEY_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);
