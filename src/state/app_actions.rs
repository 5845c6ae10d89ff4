//! User-triggered actions: clipboard, deep links, node selection and UUID reset.

use std::time::Instant;

use super::{App, COPY_ACK_DURATION, TOAST_DURATION};
use crate::domain::ClientTarget;
use crate::state::platform::copy_text_async;

/// Acknowledgment shown after a successful copy.
pub(crate) const COPY_ACK_MESSAGE: &str = "[+] Copied to clipboard";

const NO_SUBSCRIPTION_MESSAGE: &str = "[x] Subscription URL not loaded";

impl App {
    /// Clears loaded data and fetches everything again.
    pub(crate) fn refresh(&mut self) {
        self.data.clear();
        self.fetch_all();
        self.ui.show_toast("Refreshing...", TOAST_DURATION);
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    /// Copies the filtered subscription URL and acknowledges success.
    pub(crate) async fn copy_link(&mut self) {
        let Some(links) = self.links() else {
            self.ui.show_toast(NO_SUBSCRIPTION_MESSAGE, TOAST_DURATION);
            return;
        };
        let copied = copy_text_async(links.copy).await;
        self.acknowledge_copy(copied, Instant::now());
    }

    /// Shows the copy acknowledgment on success. Failures stay silent.
    ///
    /// Each acknowledgment replaces any pending one, so the notice stays up
    /// until [`COPY_ACK_DURATION`] after the latest successful copy.
    pub(crate) fn acknowledge_copy(&mut self, copied: bool, now: Instant) {
        if copied {
            self.ui.toast.show(COPY_ACK_MESSAGE, COPY_ACK_DURATION, now);
        }
    }

    // ========================================================================
    // Deep Links
    // ========================================================================

    /// Deep link for `target` under the current selection.
    #[must_use]
    pub fn deep_link(&self, target: ClientTarget) -> Option<String> {
        self.data
            .subscribe_url()
            .map(|base| target.deep_link(&crate::domain::compose_filtered(base, &self.selection)))
    }

    /// Hands the deep link for `target` to the OS URL handler.
    pub(crate) fn open_deep_link(&mut self, target: ClientTarget) {
        let Some(link) = self.deep_link(target) else {
            self.ui.show_toast(NO_SUBSCRIPTION_MESSAGE, TOAST_DURATION);
            return;
        };
        match open::that(&link) {
            Ok(()) => {
                tracing::debug!("Opened {} deep link", target.label());
                self.ui
                    .show_toast(format!("[+] Opened in {}", target.label()), TOAST_DURATION);
            }
            Err(e) => {
                tracing::warn!("Failed to open {} deep link: {e}", target.label());
                self.ui.show_toast(
                    format!("[x] Failed to open {}: {e}", target.label()),
                    TOAST_DURATION,
                );
            }
        }
    }

    // ========================================================================
    // Node Selection
    // ========================================================================

    /// Toggles the catalog entry at `index` by replacing the whole selection.
    pub(crate) fn toggle_node_at(&mut self, index: usize) {
        let Some(node) = self.catalog.nodes().get(index) else {
            return;
        };
        let next = self.selection.toggled(node);
        self.selection.replace(next);
        tracing::debug!("Selection: {}", self.selection.summary());
    }

    // ========================================================================
    // UUID Reset
    // ========================================================================

    /// Opens the reset confirmation once account data is available.
    pub(crate) fn request_uuid_reset(&mut self) {
        if self.data.user.as_loaded().is_some() {
            self.ui.open_confirm_reset();
        } else {
            self.ui
                .show_toast("[x] Account information not loaded", TOAST_DURATION);
        }
    }
}
