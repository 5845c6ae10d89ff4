//! Regional entrance picker.
//!
//! A checkbox list of the catalog. Checked rows are in the current selection;
//! the order entrances were picked in is shown next to their marker.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
};

use crate::constants::{CHECKED_SYMBOL, UNCHECKED_SYMBOL};
use crate::domain::{NodeCatalog, SelectionSet};
use crate::theme::{HIGHLIGHT_STYLE, MUTED_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::{create_popup_block, key_hints};
use crate::ui::layout::centered_popup_area;

const POPUP_WIDTH: u16 = 48;

/// Renders the picker with `cursor` highlighted.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    catalog: &NodeCatalog,
    selection: &SelectionSet,
    cursor: usize,
) {
    // Rows, summary, blank and hint lines plus borders.
    let height = u16::try_from(catalog.len()).unwrap_or(u16::MAX).saturating_add(5);
    let popup_area = centered_popup_area(area, POPUP_WIDTH, height);

    let block = create_popup_block("Regional Entrance");
    let inner = block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    let list_height = inner.height.saturating_sub(3);
    let list_area = Rect::new(inner.x, inner.y, inner.width, list_height);
    let items: Vec<ListItem> = catalog
        .nodes()
        .iter()
        .map(|node| {
            let checked = selection.contains(&node.id);
            let (marker, style) = if checked {
                (CHECKED_SYMBOL, Style::default().fg(SUCCESS_COLOR))
            } else {
                (UNCHECKED_SYMBOL, Style::default())
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {marker} "), style),
                Span::styled(format!("{:<3} ", node.id), style),
                Span::styled(node.name.clone(), Style::default().fg(MUTED_COLOR)),
            ]))
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(cursor));
    let list = List::new(items).highlight_style(HIGHLIGHT_STYLE);
    frame.render_stateful_widget(list, list_area, &mut state);

    let summary_area = Rect::new(inner.x, inner.y + list_height, inner.width, 1);
    frame.render_widget(
        Paragraph::new(selection.summary())
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        summary_area,
    );

    let help_area = Rect::new(
        inner.x,
        inner.bottom().saturating_sub(1),
        inner.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(key_hints(&[
            ("↑/↓", "Move"),
            ("Space", "Toggle"),
            ("Enter", "Done"),
        ]))
        .alignment(Alignment::Center),
        help_area,
    );
}

// ============================================================================
// Tests
// ============================================================================
