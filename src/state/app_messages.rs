//! Message processing for background fetch results.

use super::{App, AppMessage, TOAST_DURATION};

/// Shown when the backend rejects the stored token.
pub(crate) const SESSION_EXPIRED_MESSAGE: &str =
    "Session expired. Run `subdash login` to sign in again.";

impl App {
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.apply_message(message);
        }
    }

    pub(crate) fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::SubscriptionLoaded(subscription) => {
                self.data.subscription = subscription;
            }
            AppMessage::KnowledgeLoaded(knowledge) => {
                self.data.knowledge = knowledge;
            }
            AppMessage::TicketsLoaded(tickets) => {
                self.data.tickets = tickets;
            }
            AppMessage::UserInfoLoaded(user) => {
                self.data.user = user;
            }
            AppMessage::PlansLoaded(plans) => {
                self.data.set_plans(plans);
            }
            AppMessage::UuidReset(Ok(uuid)) => {
                tracing::info!("Account UUID reset");
                self.data.set_uuid(uuid);
                self.ui.show_toast("[+] UUID reset", TOAST_DURATION);
            }
            AppMessage::UuidReset(Err(error)) => {
                self.ui
                    .show_toast(format!("[x] UUID reset failed: {error}"), TOAST_DURATION);
            }
            AppMessage::SessionExpired => {
                self.ui.show_message(SESSION_EXPIRED_MESSAGE);
            }
        }
    }
}
