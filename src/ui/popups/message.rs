//! Message popup rendering.
//!
//! A generic popup for informational messages and errors, sized to its text.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::ui::helpers::{create_popup_block, key_hints};
use crate::ui::layout::centered_popup_area;

/// Renders a message popup with auto-sized dimensions.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let message_lines = u16::try_from(message.lines().count().max(1)).unwrap_or(u16::MAX);
    let longest_line = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let longest_line = u16::try_from(longest_line).unwrap_or(u16::MAX);

    let popup_width = 40u16
        .max(longest_line.saturating_add(6))
        .min(area.width * 8 / 10);
    let popup_height = 6u16.max(message_lines.saturating_add(4));

    let popup_area = centered_popup_area(area, popup_width, popup_height);

    let block = create_popup_block("Message");
    let inner = block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    let message_area = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(2),
    );
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        message_area,
    );

    let separator = "─".repeat(usize::from(inner.width));
    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(Color::DarkGray)),
        Rect::new(inner.x, inner.bottom().saturating_sub(2), inner.width, 1),
    );

    frame.render_widget(
        Paragraph::new(key_hints(&[("Esc/Enter", "Close")])).alignment(Alignment::Center),
        Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1),
    );
}

// ============================================================================
// Tests
// ============================================================================
