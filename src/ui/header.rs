//! Header rendering.
//!
//! Logo on the left, the signed-in account and backend on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{MUTED_COLOR, SUCCESS_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if inner.height == 0 {
        return;
    }

    let logo = Paragraph::new(logo()).alignment(Alignment::Left);
    frame.render_widget(logo, Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(1), 1));

    if inner.width > 40 {
        let status = Paragraph::new(status_line(app)).alignment(Alignment::Right);
        frame.render_widget(
            status,
            Rect::new(inner.x, inner.y, inner.width.saturating_sub(1), 1),
        );
    }
}

fn logo() -> Line<'static> {
    Line::from(vec!["[".into(), "sub".green().bold(), "dash".blue().bold(), "]".into()])
}

/// Account email once loaded, otherwise the backend host.
fn status_line(app: &App) -> Line<'static> {
    let backend = app.client.base_url().to_string();
    match app.data.user.as_loaded() {
        Some(user) => Line::from(vec![
            user.email.clone().fg(SUCCESS_COLOR).add_modifier(Modifier::BOLD),
            " @ ".fg(MUTED_COLOR),
            backend.fg(MUTED_COLOR),
        ]),
        None if app.data.user.is_loading() => Line::styled(
            format!("Connecting to {backend}..."),
            Style::default().fg(MUTED_COLOR),
        ),
        None => Line::styled(
            format!("Not signed in @ {backend}"),
            Style::default().fg(WARNING_COLOR),
        ),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Loadable;
    use crate::test_utils::AppMother;
    use ratatui::{Terminal, backend::TestBackend};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_logo_spans() {
        assert_eq!(line_text(&logo()), "[subdash]");
    }

    #[test]
    fn test_status_line_variants() {
        let mut app = AppMother::empty();
        assert_eq!(line_text(&status_line(&app)), "Connecting to http://127.0.0.1:9...");

        app.data.user = Loadable::Failed("HTTP error! status: 401".to_string());
        assert_eq!(line_text(&status_line(&app)), "Not signed in @ http://127.0.0.1:9");

        let app = AppMother::loaded();
        assert_eq!(
            line_text(&status_line(&app)),
            "user@example.com @ http://127.0.0.1:9"
        );
    }

    #[test]
    fn test_header_renders_logo_and_account() {
        let app = AppMother::loaded();
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..80).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(row.contains("[subdash]"));
        assert!(row.contains("user@example.com"));
    }
}
