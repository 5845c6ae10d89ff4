//! Account panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::domain::UserInfo;
use crate::state::App;
use crate::theme::{ACCENT_COLOR, KEY_STYLE, MUTED_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::{create_border_block, labeled_line};

use super::loaded_or_placeholder;

pub fn render(app: &App, frame: &mut Frame, area: Rect, focused: bool) {
    let block = create_border_block("Account", focused);
    let Some((user, inner)) = loaded_or_placeholder(frame, area, block, &app.data.user) else {
        return;
    };

    frame.render_widget(Paragraph::new(account_lines(user, app.ui.uuid_revealed)), inner);
}

fn account_lines(user: &UserInfo, uuid_revealed: bool) -> Vec<Line<'static>> {
    let balance_style = Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD);
    let telegram = if user.telegram_connected() {
        Span::styled("Connected", Style::default().fg(SUCCESS_COLOR))
    } else {
        Span::styled("Not connected", Style::default().fg(MUTED_COLOR))
    };

    vec![
        labeled_line("Email", Span::raw(user.email.clone())),
        labeled_line("UUID", Span::raw(user.uuid_display(uuid_revealed).to_string())),
        labeled_line("Balance", Span::styled(user.balance_label(), balance_style)),
        labeled_line("Commission", Span::styled(user.commission_label(), balance_style)),
        labeled_line("Member since", Span::raw(user.member_since())),
        labeled_line("Telegram", telegram),
        Line::default(),
        Line::from(vec![
            Span::styled("u", KEY_STYLE),
            Span::styled(
                if uuid_revealed { " Hide UUID  " } else { " Show UUID  " },
                Style::default().fg(MUTED_COLOR),
            ),
            Span::styled("R", KEY_STYLE),
            Span::styled(" Reset UUID", Style::default().fg(MUTED_COLOR)),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::MASKED_UUID;
    use crate::test_utils::{AppMother, UserMother};
    use crate::ui::panels::test_support::{buffer_text, draw_panel};

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_uuid_is_masked_until_revealed() {
        let user = UserMother::regular();

        let masked = text_of(&account_lines(&user, false));
        assert_eq!(masked[1], format!("UUID: {MASKED_UUID}"));

        let revealed = text_of(&account_lines(&user, true));
        assert_eq!(revealed[1], "UUID: 11111111-2222-3333-4444-555555555555");
    }

    #[test]
    fn test_balances_and_telegram() {
        let lines = text_of(&account_lines(&UserMother::regular(), false));
        assert_eq!(lines[2], "Balance: ¥12.34");
        assert_eq!(lines[3], "Commission: ¥0.50");
        assert_eq!(lines[5], "Telegram: Connected");
    }

    #[test]
    fn test_panel_renders() {
        let app = AppMother::loaded();
        let text = buffer_text(&draw_panel(&app, 60, 12, render));
        assert!(text.contains("Email: user@example.com"));
        assert!(text.contains("u Show UUID"));
    }
}
