//! Cross-platform clipboard abstraction.
//!
//! # Platform-Specific Behavior
//!
//! On Linux, external tools are tried in order before falling back to
//! `arboard`, because they keep the clipboard content alive after the
//! application exits:
//! 1. `wl-copy` (Wayland)
//! 2. `xclip` (X11)
//! 3. `xsel` (X11 alternative)
//!
//! macOS and Windows use the `arboard` crate directly.

use std::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// Clipboard is not available on this system.
    NotAvailable,
    /// Failed to copy text to clipboard.
    CopyFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable => write!(f, "Clipboard not available"),
            Self::CopyFailed(msg) => write!(f, "Failed to copy: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

// ============================================================================
// Clipboard Manager
// ============================================================================

/// Cross-platform clipboard writer.
#[derive(Debug, Clone, Copy)]
pub struct ClipboardManager {
    prefer_external_tools: bool,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefer_external_tools: true,
        }
    }

    /// Copies text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is not available or the copy fails.
    pub fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        #[cfg(target_os = "linux")]
        if self.prefer_external_tools && Self::copy_with_external_tool(text).is_ok() {
            return Ok(());
        }

        Self::copy_with_arboard(text)
    }

    fn copy_with_arboard(text: &str) -> ClipboardResult<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> ClipboardResult<()> {
        const TOOLS: [(&str, &[&str]); 3] = [
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ];

        if TOOLS
            .iter()
            .any(|(tool, args)| Self::try_tool(tool, args, text))
        {
            Ok(())
        } else {
            Err(ClipboardError::NotAvailable)
        }
    }

    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };
        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }
        drop(stdin);

        child.wait().map(|s| s.success()).unwrap_or(false)
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Copies text with the default clipboard manager.
///
/// # Errors
///
/// Returns an error if the clipboard is not available or the copy fails.
pub fn copy_text(text: &str) -> ClipboardResult<()> {
    ClipboardManager::new().copy_text(text)
}

/// Copies text off the async runtime and reports whether it succeeded.
///
/// Failures are logged and never surfaced to the caller as an error.
pub async fn copy_text_async(text: String) -> bool {
    match tokio::task::spawn_blocking(move || copy_text(&text)).await {
        Ok(Ok(())) => true,
        Ok(Err(err)) => {
            tracing::warn!("Clipboard write failed: {err}");
            false
        }
        Err(err) => {
            tracing::warn!("Clipboard task panicked: {err}");
            false
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
