//! UUID reset confirmation popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::WARNING_COLOR;
use crate::ui::helpers::{create_popup_block, key_hints};
use crate::ui::layout::centered_popup_area;

const WARNING: &str = "Resetting the UUID invalidates every imported subscription. \
                       Clients must import the new link again.";

/// Renders the reset confirmation.
pub fn render(frame: &mut Frame, area: Rect) {
    let popup_area = centered_popup_area(area, 54, 9);

    let block = create_popup_block("Reset UUID");
    let inner = block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    let message_area = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(2),
    );
    let message = Paragraph::new(vec![
        Line::styled("Reset your account UUID?", Style::default().fg(WARNING_COLOR)),
        Line::default(),
        Line::raw(WARNING),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(message, message_area);

    let separator = "─".repeat(usize::from(inner.width));
    let separator_area = Rect::new(
        inner.x,
        inner.bottom().saturating_sub(2),
        inner.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(Color::DarkGray)),
        separator_area,
    );

    let help_area = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);
    frame.render_widget(
        Paragraph::new(key_hints(&[("y", "Reset"), ("n/Esc", "Cancel")]))
            .alignment(Alignment::Center),
        help_area,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_confirm_popup_renders() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, frame.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Reset UUID"));
        assert!(text.contains("Reset your account UUID?"));
        assert!(text.contains("y:Reset  n/Esc:Cancel"));
    }

    #[test]
    fn test_confirm_popup_small_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        terminal.draw(|frame| render(frame, frame.area())).unwrap();
        assert!(!terminal.backend().buffer().area().is_empty());
    }
}
