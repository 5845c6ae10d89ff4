//! UI rendering module for the dashboard.
//!
//! This module provides the main rendering entry point and orchestrates
//! rendering of all UI components including panels, popups, and overlays.
//!
//! # Module Structure
//!
//! - `panels` - Subscription, account, knowledge and ticket panels
//! - `popups` - Modal dialogs (node picker, plans, confirmations, messages)
//! - `components` - Reusable UI components (toast, usage bar)
//! - `layout` - Layout calculations and structs
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use std::time::Instant;

use ratatui::{Frame, layout::Rect};

use crate::state::{App, Focus, PopupState};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Draws, in order:
/// 1. Header, dashboard panels and footer
/// 2. The active popup, if any
/// 3. The toast notification on top of everything
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let app_layout = layout::calculate_app_layout(size);

    header::render(frame, app_layout.header, app);
    render_main_content(app, frame, app_layout.main);
    footer::render(frame, app_layout.footer, app);

    if app.ui.has_active_popup() {
        render_popups(app, frame, size);
    }

    if let Some(message) = app.ui.toast.message(Instant::now()) {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Internal Rendering Functions
// ============================================================================

fn render_main_content(app: &App, frame: &mut Frame, area: Rect) {
    let dashboard = layout::calculate_dashboard_layout(area);
    let focus = app.ui.focus;

    panels::render_subscription(
        app,
        frame,
        dashboard.subscription,
        focus == Focus::Subscription,
    );
    panels::render_account(app, frame, dashboard.account, focus == Focus::Account);
    panels::render_knowledge(app, frame, dashboard.knowledge, focus == Focus::Knowledge);
    panels::render_tickets(app, frame, dashboard.tickets, focus == Focus::Tickets);
}

fn render_popups(app: &App, frame: &mut Frame, area: Rect) {
    match &app.ui.popup_state {
        PopupState::NodeSelect { cursor } => {
            popups::render_node_select(frame, area, &app.catalog, &app.selection, *cursor);
        }
        PopupState::ConfirmReset => {
            popups::render_confirm_reset(frame, area);
        }
        PopupState::Plans => {
            popups::render_plans(frame, area, &app.data.plans, app.ui.billing_period);
        }
        PopupState::Message(message) => {
            popups::render_message_popup(frame, area, message);
        }
        PopupState::None => {}
    }
}

// ============================================================================
// Tests
// ============================================================================
