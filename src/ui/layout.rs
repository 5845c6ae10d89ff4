//! Layout calculations for the dashboard.
//!
//! ```text
//! ┌───────────────── header ─────────────────┐
//! ├─────── subscription ──────┬─── account ──┤
//! ├─────── knowledge ─────────┴── tickets ───┤
//! └───────────────── footer ─────────────────┘
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, SUBSCRIPTION_PANEL_HEIGHT};

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
}

/// The four dashboard panels.
#[derive(Debug, Clone, Copy)]
pub struct DashboardLayout {
    pub subscription: Rect,
    pub account: Rect,
    pub knowledge: Rect,
    pub tickets: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area.
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Split the main area into the subscription/account row and the
/// knowledge/tickets row.
#[must_use]
pub fn calculate_dashboard_layout(area: Rect) -> DashboardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SUBSCRIPTION_PANEL_HEIGHT),
            Constraint::Min(3),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(rows[1]);

    DashboardLayout {
        subscription: top[0],
        account: top[1],
        knowledge: bottom[0],
        tickets: bottom[1],
    }
}

/// Calculate a centered popup area within a parent area.
///
/// The popup keeps a two-cell margin on every side of the parent.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
