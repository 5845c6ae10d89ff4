//! Command execution and input handling.
//!
//! Key events are mapped to commands, which are then executed against the
//! application state.

use crossterm::event::KeyEvent;

use super::{App, PopupState};
use crate::commands::{AppCommand, InputContext, KeyMapper};

impl App {
    pub(crate) async fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command).await;
    }

    /// Determines the current input context from the popup state.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        match &self.ui.popup_state {
            PopupState::None => InputContext::Main,
            PopupState::NodeSelect { .. } => InputContext::NodeSelect,
            PopupState::ConfirmReset => InputContext::ConfirmReset,
            PopupState::Plans => InputContext::Plans,
            PopupState::Message(_) => InputContext::MessagePopup,
        }
    }

    /// Executes an application command.
    pub(crate) async fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Refresh => {
                self.refresh();
            }
            AppCommand::CycleFocus => {
                self.ui.cycle_focus();
            }
            AppCommand::Dismiss => {
                self.ui.dismiss_popup();
            }

            // === Subscription Links ===
            AppCommand::CopyLink => {
                self.copy_link().await;
            }
            AppCommand::OpenDeepLink(target) => {
                self.open_deep_link(target);
            }

            // === Node Picker ===
            AppCommand::OpenNodeSelect => {
                self.ui.open_node_select();
            }
            AppCommand::NodeUp => {
                self.ui.move_node_cursor(-1, self.catalog.len());
            }
            AppCommand::NodeDown => {
                self.ui.move_node_cursor(1, self.catalog.len());
            }
            AppCommand::ToggleNode => {
                if let Some(cursor) = self.ui.popup_state.node_cursor() {
                    self.toggle_node_at(cursor);
                }
            }

            // === Account ===
            AppCommand::ToggleUuid => {
                self.ui.toggle_uuid();
            }
            AppCommand::RequestUuidReset => {
                self.request_uuid_reset();
            }
            AppCommand::ConfirmUuidReset => {
                self.ui.dismiss_popup();
                self.spawn_uuid_reset();
            }

            // === Plans ===
            AppCommand::OpenPlans => {
                self.ui.open_plans();
            }
            AppCommand::ToggleBillingPeriod => {
                self.ui.toggle_billing_period();
            }

            AppCommand::Noop => {}
        }
    }
}
