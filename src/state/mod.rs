//! State management module for the dashboard.
//!
//! This module provides a decomposed state architecture, separating concerns into:
//!
//! - [`DataState`] - Backend data (subscription, knowledge, tickets, account, plans)
//! - [`UiState`] - UI presentation concerns (focus, popups, toasts)
//! - [`AppConfig`] - Persistent configuration
//! - [`SelectionSet`] - The regional filter picked this session
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │                       App                         │
//! ├──────────────┬──────────────┬─────────────────────┤
//! │  DataState   │   UiState    │  NodeCatalog +      │
//! │  - loadables │  - focus     │  SelectionSet       │
//! │              │  - popups    │                     │
//! │              │  - toast     │                     │
//! └──────────────┴──────────────┴─────────────────────┘
//! ```

use tokio::sync::mpsc;

use crate::client::ApiClient;
use crate::domain::{
    KnowledgeBase, NodeCatalog, PurchasePlan, SelectionSet, Subscription, SubscriptionLinks,
    Ticket, UserInfo,
};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod data;
pub mod platform;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use data::{DataState, Loadable};
pub use ui_state::{COPY_ACK_DURATION, Focus, PopupState, TOAST_DURATION, Toast, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background fetch tasks to the main app loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    SubscriptionLoaded(Loadable<Subscription>),
    KnowledgeLoaded(Loadable<KnowledgeBase>),
    TicketsLoaded(Loadable<Vec<Ticket>>),
    UserInfoLoaded(Loadable<UserInfo>),
    PlansLoaded(Loadable<Vec<PurchasePlan>>),
    /// UUID reset finished with the new UUID or an error message.
    UuidReset(Result<String, String>),
    /// The backend rejected the session token.
    SessionExpired,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Data state - everything fetched from the backend.
    pub data: DataState,

    /// UI state - focus, popups, toasts.
    pub ui: UiState,

    /// Entrances offered by the node picker.
    pub catalog: NodeCatalog,

    /// Current regional filter; replaced wholesale on every change.
    pub selection: SelectionSet,

    /// Whether the application should exit.
    pub exit: bool,

    // NOTE: Channel sends use `let _ = tx.send(...)` throughout this module.
    // Receivers may be dropped during shutdown.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    pub(crate) client: ApiClient,
}

impl App {
    /// Links for the loaded subscription and the current selection.
    ///
    /// Recomputed on every call.
    #[must_use]
    pub fn links(&self) -> Option<SubscriptionLinks> {
        self.data
            .subscribe_url()
            .map(|base| SubscriptionLinks::compose(base, &self.selection))
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing
mod app_messages;

// Command execution, input handling
mod app_commands;

// Clipboard, deep links, selection, UUID reset
mod app_actions;

// ============================================================================
// Tests
// ============================================================================
