//! Dashboard panels.
//!
//! Each panel renders one backend source. A source that is still loading or
//! failed to load shows a placeholder inside its own border; other panels are
//! unaffected.
//!
//! - **Subscription**: plan, expiry, usage, copy URL and client links
//! - **Account**: masked UUID, balances, membership and Telegram status
//! - **Knowledge**: a few article titles per category
//! - **Tickets**: support tickets with status badges

pub mod account;
pub mod knowledge;
pub mod subscription;
pub mod tickets;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Paragraph, Wrap},
};

use crate::state::Loadable;
use crate::theme::{ERROR_COLOR, MUTED_COLOR};

pub use account::render as render_account;
pub use knowledge::render as render_knowledge;
pub use subscription::render as render_subscription;
pub use tickets::render as render_tickets;

/// Draws `block` and returns the loaded value, or draws a loading / error
/// placeholder inside `block` and returns `None`.
fn loaded_or_placeholder<'a, T>(
    frame: &mut Frame,
    area: Rect,
    block: Block<'_>,
    source: &'a Loadable<T>,
) -> Option<(&'a T, Rect)> {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (text, color) = match source {
        Loadable::Loaded(value) => return Some((value, inner)),
        Loadable::Loading => ("Loading...".to_string(), MUTED_COLOR),
        Loadable::Failed(error) => (format!("Failed to load: {error}"), ERROR_COLOR),
    };

    let placeholder = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(placeholder, inner);
    None
}


#[cfg(test)]
mod tests {
    use super::test_support::{buffer_text, draw_panel};
    use super::*;
    use crate::test_utils::AppMother;

    #[test]
    fn test_loading_placeholder() {
        let app = AppMother::empty();
        let text = buffer_text(&draw_panel(&app, 40, 5, render_tickets));
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn test_failed_placeholder_keeps_error() {
        let mut app = AppMother::loaded();
        app.data.knowledge = Loadable::Failed("HTTP error! status: 500".to_string());

        let text = buffer_text(&draw_panel(&app, 60, 6, render_knowledge));
        assert!(text.contains("Failed to load: HTTP error! status: 500"));

        // The tickets panel still renders its data.
        let text = buffer_text(&draw_panel(&app, 60, 6, render_tickets));
        assert!(text.contains("Cannot connect"));
    }
}
