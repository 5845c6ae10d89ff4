//! UI helper functions for creating styled blocks and text.
//!
//! Reusable helpers so every panel and popup shares the same borders,
//! label layout and key hint styling.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::theme::{
    BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE, KEY_STYLE, LABEL_STYLE, MUTED_COLOR,
};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block with proper styling based on focus state.
///
/// Focused blocks get a double border and a `●` marker in the title.
///
/// # Example
///
/// ```rust,ignore
/// let focused_block = create_border_block("Subscription", true);
/// let unfocused_block = create_border_block("Tickets", false);
/// ```
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'_> {
    let (border_style, border_set, title_style, display_title) = if focused {
        (
            FOCUSED_BORDER_STYLE,
            border::DOUBLE,
            FOCUSED_TITLE_STYLE,
            if title.is_empty() {
                String::new()
            } else {
                format!(" ● {title} ")
            },
        )
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            if title.is_empty() {
                String::new()
            } else {
                format!(" {title} ")
            },
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup-style block with centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

// ============================================================================
// Text Helpers
// ============================================================================

/// A `Label: value` line with a muted label.
#[must_use]
pub fn labeled_line<'a>(label: &'a str, value: impl Into<Span<'a>>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), LABEL_STYLE),
        value.into(),
    ])
}

/// A hint line such as `y:Yes  n/Esc:No` with highlighted keys.
#[must_use]
pub fn key_hints<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, KEY_STYLE));
        spans.push(Span::styled(format!(":{action}"), Style::default().fg(MUTED_COLOR)));
    }
    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================
