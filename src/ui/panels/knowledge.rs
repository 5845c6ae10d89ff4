//! Knowledge-base panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::BULLET;
use crate::domain::knowledge::featured;
use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::create_border_block;

use super::loaded_or_placeholder;

pub fn render(app: &App, frame: &mut Frame, area: Rect, focused: bool) {
    let block = create_border_block("Knowledge Base", focused);
    let Some((base, inner)) = loaded_or_placeholder(frame, area, block, &app.data.knowledge)
    else {
        return;
    };

    let mut lines = Vec::new();
    for (category, articles) in featured(base) {
        lines.push(Line::styled(
            category.to_string(),
            Style::default().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD),
        ));
        lines.extend(articles.iter().map(|article| {
            Line::from(vec![
                Span::styled(format!("  {BULLET} "), Style::default().fg(MUTED_COLOR)),
                Span::raw(article.title.clone()),
            ])
        }));
    }

    if lines.is_empty() {
        lines.push(Line::styled(
            "No articles",
            Style::default().fg(MUTED_COLOR),
        ));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
