//! Footer rendering: key hints for the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;

use super::helpers::key_hints;

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(key_hints(hints_for(app.get_input_context())))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn hints_for(context: InputContext) -> &'static [(&'static str, &'static str)] {
    match context {
        InputContext::Main => &[
            ("q", "Quit"),
            ("r", "Refresh"),
            ("c", "Copy"),
            ("1-5", "Open in client"),
            ("s", "Nodes"),
            ("p", "Plans"),
            ("u", "UUID"),
            ("R", "Reset UUID"),
            ("Tab", "Focus"),
        ],
        InputContext::NodeSelect => &[
            ("↑/↓", "Move"),
            ("Space", "Toggle"),
            ("Enter/Esc", "Done"),
        ],
        InputContext::ConfirmReset => &[("y", "Reset"), ("n/Esc", "Cancel")],
        InputContext::Plans => &[("Tab", "Billing period"), ("Esc/p", "Close")],
        InputContext::MessagePopup => &[("Esc/Enter", "Close")],
    }
}

// ============================================================================
// Tests
// ============================================================================
