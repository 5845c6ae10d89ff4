//! Application lifecycle management.
//!
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop
//! - Data fetching

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::client::ApiClient;
use crate::constants::TICK_RATE;
use crate::domain::{DashError, NodeCatalog, SelectionSet};
use crate::tui::Tui;
use crate::ui;

use super::{App, AppMessage, DataState, Loadable, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App for the given catalog and backend client.
    #[must_use]
    pub fn new(catalog: NodeCatalog, client: ApiClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            data: DataState::new(),
            ui: UiState::new(),
            catalog,
            selection: SelectionSet::new(),
            exit: false,
            message_tx,
            message_rx,
            client,
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.fetch_all();

        let tick_rate = Duration::from_millis(TICK_RATE);
        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key).await;
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.ui.expire_toast(Instant::now());
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    // ========================================================================
    // Data Fetching
    // ========================================================================

    /// Reloads every data source in the background.
    ///
    /// Each source runs in its own task and reports as soon as it finishes,
    /// so a slow or failing endpoint never holds back the others.
    pub(crate) fn fetch_all(&self) {
        self.spawn_fetch(
            "subscription",
            |client| async move { client.get_subscription().await },
            AppMessage::SubscriptionLoaded,
        );
        self.spawn_fetch(
            "knowledge base",
            |client| async move { client.fetch_knowledge().await },
            AppMessage::KnowledgeLoaded,
        );
        self.spawn_fetch(
            "tickets",
            |client| async move { client.fetch_tickets().await },
            AppMessage::TicketsLoaded,
        );
        self.spawn_fetch(
            "account",
            |client| async move { client.fetch_user_info().await },
            AppMessage::UserInfoLoaded,
        );
        self.spawn_fetch(
            "plans",
            |client| async move { client.fetch_plans().await },
            AppMessage::PlansLoaded,
        );
    }

    fn spawn_fetch<T, Fut>(
        &self,
        source: &'static str,
        fetch: impl FnOnce(ApiClient) -> Fut,
        loaded: fn(Loadable<T>) -> AppMessage,
    ) where
        T: Send + 'static,
        Fut: Future<Output = Result<T, DashError>> + Send + 'static,
    {
        let message_tx = self.message_tx.clone();
        let request = fetch(self.client.clone());

        tokio::spawn(async move {
            let result = request.await;
            log_failure(source, &result);
            let expired = result.as_ref().is_err_and(DashError::is_auth_failure);

            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(loaded(Loadable::from_result(result)));
            if expired {
                let _ = message_tx.send(AppMessage::SessionExpired);
            }
        });
    }

    /// Asks the backend for a new UUID in the background.
    pub(crate) fn spawn_uuid_reset(&self) {
        let message_tx = self.message_tx.clone();
        let client = self.client.clone();

        tokio::spawn(async move {
            let result = client.reset_uuid().await;
            let expired = result.as_ref().is_err_and(DashError::is_auth_failure);
            let _ = message_tx.send(AppMessage::UuidReset(
                result.map(|r| r.uuid).map_err(|e| e.to_string()),
            ));
            if expired {
                let _ = message_tx.send(AppMessage::SessionExpired);
            }
        });
    }
}

fn log_failure<T>(source: &str, result: &Result<T, DashError>) {
    if let Err(err) = result {
        tracing::warn!("Failed to load {source}: {err}");
    }
}
