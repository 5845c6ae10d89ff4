//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner. The message prefix picks
//! the color: `[+]` for success, `[x]` for failure.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

// ============================================================================
// Constants
// ============================================================================

const MIN_TOAST_WIDTH: u16 = 20;

const TOAST_HEIGHT: u16 = 3;

/// Distance from the right edge of the screen.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Keeps the toast above the footer hint line.
const TOAST_PADDING_BOTTOM: u16 = 2;

/// Borders plus one space on each side.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders `message` as a toast in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_area(area, message);

    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let text = Paragraph::new(message)
        .style(Style::default().fg(text_color(message)))
        .alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn toast_area(area: Rect, message: &str) -> Rect {
    let message_len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let width = message_len
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);

    let x = area.x + area.width.saturating_sub(width + TOAST_PADDING_RIGHT);
    let y = area.y
        + area
            .height
            .saturating_sub(TOAST_HEIGHT + TOAST_PADDING_BOTTOM);

    Rect::new(x, y, width, TOAST_HEIGHT.min(area.height))
}

fn text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

// ============================================================================
// Tests
// ============================================================================
