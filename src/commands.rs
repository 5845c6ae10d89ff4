//! Command pattern for key event handling in the TUI application.
//!
//! Key input is translated into [`AppCommand`]s by [`KeyMapper`], a pure
//! function of the key and the current [`InputContext`]. The app then
//! executes the command. Key mappings can be tested in isolation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::ClientTarget;

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Dashboard panels, no popup open.
    Main,
    /// Regional entrance picker is open.
    NodeSelect,
    /// UUID reset confirmation is open.
    ConfirmReset,
    /// Plan browser is open.
    Plans,
    /// Viewing a message/notification popup.
    MessagePopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    Quit,
    /// Reload every data source.
    Refresh,
    CycleFocus,
    /// Close the current popup.
    Dismiss,

    // === Subscription Links ===
    /// Copy the filtered subscription URL.
    CopyLink,
    /// Hand the deep link for a client to the OS.
    OpenDeepLink(ClientTarget),

    // === Node Picker ===
    OpenNodeSelect,
    NodeUp,
    NodeDown,
    /// Toggle the highlighted node in the selection.
    ToggleNode,

    // === Account ===
    ToggleUuid,
    /// Ask for confirmation before resetting the UUID.
    RequestUuidReset,
    ConfirmUuidReset,

    // === Plans ===
    OpenPlans,
    ToggleBillingPeriod,

    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command.
    ///
    /// `Ctrl+C` quits from every context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }
        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::NodeSelect => Self::map_node_select_keys(key),
            InputContext::ConfirmReset => Self::map_confirm_reset_keys(key),
            InputContext::Plans => Self::map_plans_keys(key),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
        }
    }

    fn map_main_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Tab => AppCommand::CycleFocus,
            KeyCode::Char('s') => AppCommand::OpenNodeSelect,
            KeyCode::Char('c') => AppCommand::CopyLink,
            KeyCode::Char('u') => AppCommand::ToggleUuid,
            KeyCode::Char('R') => AppCommand::RequestUuidReset,
            KeyCode::Char('p') => AppCommand::OpenPlans,
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|d| ClientTarget::from_shortcut(d as usize))
                .map_or(AppCommand::Noop, AppCommand::OpenDeepLink),
            _ => AppCommand::Noop,
        }
    }

    fn map_node_select_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => AppCommand::Dismiss,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::NodeUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::NodeDown,
            KeyCode::Char(' ') => AppCommand::ToggleNode,
            _ => AppCommand::Noop,
        }
    }

    fn map_confirm_reset_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('y' | 'Y') => AppCommand::ConfirmUuidReset,
            KeyCode::Char('n' | 'N') | KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    fn map_plans_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Char('p') => AppCommand::Dismiss,
            KeyCode::Tab => AppCommand::ToggleBillingPeriod,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }

    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use rstest::rstest;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[rstest]
    #[case(KeyCode::Char('q'), AppCommand::Quit)]
    #[case(KeyCode::Char('r'), AppCommand::Refresh)]
    #[case(KeyCode::Tab, AppCommand::CycleFocus)]
    #[case(KeyCode::Char('s'), AppCommand::OpenNodeSelect)]
    #[case(KeyCode::Char('c'), AppCommand::CopyLink)]
    #[case(KeyCode::Char('u'), AppCommand::ToggleUuid)]
    #[case(KeyCode::Char('R'), AppCommand::RequestUuidReset)]
    #[case(KeyCode::Char('p'), AppCommand::OpenPlans)]
    #[case(KeyCode::Char('1'), AppCommand::OpenDeepLink(ClientTarget::Clash))]
    #[case(KeyCode::Char('3'), AppCommand::OpenDeepLink(ClientTarget::Shadowrocket))]
    #[case(KeyCode::Char('5'), AppCommand::OpenDeepLink(ClientTarget::QuantumultX))]
    #[case(KeyCode::Char('0'), AppCommand::Noop)]
    #[case(KeyCode::Char('6'), AppCommand::Noop)]
    #[case(KeyCode::F(1), AppCommand::Noop)]
    fn test_main_context_mapping(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(
            KeyMapper::map_key(key_event(code), &InputContext::Main),
            expected
        );
    }

    #[rstest]
    #[case(KeyCode::Up, AppCommand::NodeUp)]
    #[case(KeyCode::Down, AppCommand::NodeDown)]
    #[case(KeyCode::Char(' '), AppCommand::ToggleNode)]
    #[case(KeyCode::Enter, AppCommand::Dismiss)]
    #[case(KeyCode::Esc, AppCommand::Dismiss)]
    #[case(KeyCode::Char('c'), AppCommand::Noop)]
    fn test_node_select_mapping(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(
            KeyMapper::map_key(key_event(code), &InputContext::NodeSelect),
            expected
        );
    }

    #[rstest]
    #[case(KeyCode::Char('y'), AppCommand::ConfirmUuidReset)]
    #[case(KeyCode::Char('n'), AppCommand::Dismiss)]
    #[case(KeyCode::Esc, AppCommand::Dismiss)]
    #[case(KeyCode::Enter, AppCommand::Noop)]
    fn test_confirm_reset_mapping(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(
            KeyMapper::map_key(key_event(code), &InputContext::ConfirmReset),
            expected
        );
    }

    #[test]
    fn test_plans_mapping() {
        let tab = KeyMapper::map_key(key_event(KeyCode::Tab), &InputContext::Plans);
        assert_eq!(tab, AppCommand::ToggleBillingPeriod);
        let esc = KeyMapper::map_key(key_event(KeyCode::Esc), &InputContext::Plans);
        assert_eq!(esc, AppCommand::Dismiss);
    }

    #[test]
    fn test_message_popup_mapping() {
        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char(' ')] {
            assert_eq!(
                KeyMapper::map_key(key_event(code), &InputContext::MessagePopup),
                AppCommand::Dismiss
            );
        }
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let key = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        };
        for context in [
            InputContext::Main,
            InputContext::NodeSelect,
            InputContext::ConfirmReset,
            InputContext::Plans,
            InputContext::MessagePopup,
        ] {
            assert_eq!(KeyMapper::map_key(key, &context), AppCommand::Quit);
        }
    }
}
