//! Subscription panel: plan, usage and the links built from the selection.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::constants::USAGE_BAR_WIDTH;
use crate::domain::{ClientTarget, Subscription};
use crate::state::App;
use crate::theme::{KEY_STYLE, MUTED_COLOR, PRIMARY_COLOR, SECONDARY_COLOR, WARNING_COLOR};
use crate::ui::components::usage_bar_line;
use crate::ui::helpers::{create_border_block, labeled_line};

use super::loaded_or_placeholder;

pub fn render(app: &App, frame: &mut Frame, area: Rect, focused: bool) {
    let block = create_border_block("Subscription", focused);
    let Some((subscription, inner)) =
        loaded_or_placeholder(frame, area, block, &app.data.subscription)
    else {
        return;
    };

    let mut lines = plan_lines(subscription);
    lines.push(Line::default());
    lines.extend(link_lines(app));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn plan_lines(subscription: &Subscription) -> Vec<Line<'static>> {
    let plan_style = if subscription.has_plan() {
        Style::default().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(WARNING_COLOR)
    };
    let usage = subscription.usage();

    vec![
        labeled_line(
            "Plan",
            Span::styled(subscription.plan_name().to_string(), plan_style),
        ),
        labeled_line("Expires", Span::raw(subscription.expiry_label())),
        labeled_line(
            "Traffic",
            Span::raw(format!("{} / {}", usage.used_gb(), usage.total_gb())),
        ),
        usage_bar_line(&usage, USAGE_BAR_WIDTH),
    ]
}

fn link_lines(app: &App) -> Vec<Line<'static>> {
    let Some(links) = app.links() else {
        return Vec::new();
    };
    let selection = &app.selection;

    let mut entrances = vec![
        Span::styled("s", KEY_STYLE),
        Span::raw(" "),
        Span::raw(selection.summary()),
    ];
    if !selection.is_empty() {
        let ids: Vec<&str> = selection.ids().collect();
        entrances.push(Span::styled(
            format!(" ({})", ids.join(", ")),
            Style::default().fg(MUTED_COLOR),
        ));
    }

    let mut clients = Vec::with_capacity(ClientTarget::ALL.len() * 3);
    for (i, target) in ClientTarget::ALL.iter().enumerate() {
        if i > 0 {
            clients.push(Span::raw("  "));
        }
        clients.push(Span::styled(format!("{}", i + 1), KEY_STYLE));
        clients.push(Span::styled(
            format!(" {}", target.label()),
            Style::default().fg(SECONDARY_COLOR),
        ));
    }

    vec![
        Line::from(entrances),
        Line::from(vec![
            Span::styled("c", KEY_STYLE),
            Span::raw(" Copy URL: "),
            Span::styled(links.copy, Style::default().fg(MUTED_COLOR)),
        ]),
        Line::from(clients),
    ]
}

// ============================================================================
// Tests
// ============================================================================
