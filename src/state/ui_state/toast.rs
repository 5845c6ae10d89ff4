//! Debounced toast notifications.
//!
//! A toast carries one message and one deadline. Showing a new message
//! replaces both, so only the most recent request decides when the
//! overlay disappears.

use std::time::{Duration, Instant};

/// How long the copy acknowledgment stays on screen.
pub const COPY_ACK_DURATION: Duration = Duration::from_millis(2000);

/// Default lifetime for other notices.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Default)]
pub struct Toast {
    current: Option<(String, Instant)>,
}

impl Toast {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message` until `now + duration`, cancelling any pending deadline.
    pub fn show(&mut self, message: impl Into<String>, duration: Duration, now: Instant) {
        self.current = Some((message.into(), now + duration));
    }

    /// Drops the toast once its deadline has passed.
    ///
    /// Returns `true` if a toast was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some((_, deadline)) if now >= *deadline => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// The message to render at `now`, if any.
    #[must_use]
    pub fn message(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|(_, deadline)| now < *deadline)
            .map(|(message, _)| message.as_str())
    }

    #[must_use]
    pub fn is_visible(&self, now: Instant) -> bool {
        self.message(now).is_some()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_single_toast_expires_after_duration() {
        let start = Instant::now();
        let mut toast = Toast::new();
        toast.show("[+] Copied to clipboard", COPY_ACK_DURATION, start);

        assert!(toast.is_visible(start + ms(1999)));
        assert!(!toast.expire(start + ms(1999)));
        assert!(!toast.is_visible(start + ms(2000)));
        assert!(toast.expire(start + ms(2000)));
        assert!(toast.message(start).is_none());
    }

    #[test]
    fn test_second_copy_extends_deadline() {
        let start = Instant::now();
        let mut toast = Toast::new();
        toast.show("[+] Copied to clipboard", COPY_ACK_DURATION, start);
        toast.show("[+] Copied to clipboard", COPY_ACK_DURATION, start + ms(500));

        // The first deadline no longer hides the acknowledgment.
        assert!(!toast.expire(start + ms(2000)));
        assert!(toast.is_visible(start + ms(2499)));
        assert!(toast.expire(start + ms(2500)));
    }

    #[test]
    fn test_newer_message_replaces_older() {
        let start = Instant::now();
        let mut toast = Toast::new();
        toast.show("first", TOAST_DURATION, start);
        toast.show("second", COPY_ACK_DURATION, start + ms(100));
        assert_eq!(toast.message(start + ms(200)), Some("second"));

        toast.clear();
        assert!(!toast.is_visible(start + ms(200)));
    }
}
