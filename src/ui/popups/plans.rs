//! Plan browser popup.
//!
//! Lists visible plans for the chosen billing period. `Tab` switches between
//! monthly and annual pricing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Tabs, Wrap},
};

use crate::constants::BULLET;
use crate::domain::plan::plans_for_period;
use crate::domain::{BillingPeriod, PurchasePlan};
use crate::state::Loadable;
use crate::theme::{ACCENT_COLOR, ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::{create_popup_block, key_hints};
use crate::ui::layout::centered_popup_area;

/// Renders the plan browser for `period`.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    plans: &Loadable<Vec<PurchasePlan>>,
    period: BillingPeriod,
) {
    let popup_area = centered_popup_area(area, 70, area.height.saturating_sub(4).max(12));

    let block = create_popup_block("Plans");
    let inner = block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let selected = match period {
        BillingPeriod::Monthly => 0,
        BillingPeriod::Yearly => 1,
    };
    let tabs = Tabs::new([BillingPeriod::Monthly.label(), BillingPeriod::Yearly.label()])
        .select(selected)
        .style(Style::default().fg(MUTED_COLOR))
        .highlight_style(Style::default().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, chunks[0]);

    let body = match plans {
        Loadable::Loading => vec![Line::styled("Loading...", Style::default().fg(MUTED_COLOR))],
        Loadable::Failed(error) => vec![Line::styled(
            format!("Failed to load: {error}"),
            Style::default().fg(ERROR_COLOR),
        )],
        Loadable::Loaded(plans) => plan_lines(plans, period),
    };
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), chunks[2]);

    frame.render_widget(
        Paragraph::new(key_hints(&[("Tab", "Billing period"), ("Esc", "Close")]))
            .alignment(Alignment::Center),
        chunks[3],
    );
}

fn plan_lines(plans: &[PurchasePlan], period: BillingPeriod) -> Vec<Line<'static>> {
    let listed = plans_for_period(plans, period);
    if listed.is_empty() {
        return vec![Line::styled(
            format!("No plans with {}", period.label().to_lowercase()),
            Style::default().fg(MUTED_COLOR),
        )];
    }

    let mut lines = Vec::new();
    for plan in listed {
        lines.push(Line::from(vec![
            Span::styled(
                plan.name.clone(),
                Style::default().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("¥{:.2} / {}", plan.price_for(period), period.unit()),
                Style::default().fg(ACCENT_COLOR),
            ),
        ]));
        lines.extend(
            plan.content_lines()
                .into_iter()
                .map(|text| Line::raw(format!("  {BULLET} {text}"))),
        );
        lines.push(Line::default());
    }
    lines
}

// ============================================================================
// Tests
// ============================================================================
