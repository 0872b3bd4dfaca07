//! Keyboard shortcut table for the tab strip.

use crate::tab::TabManager;

/// Keys the strip binds, beyond plain characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Tab,
}

/// A pressed key plus modifier state, as reported by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub key: Key,
}

/// Commands the keyboard can issue against the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripCommand {
    /// Close the active tab (no-op when it is pinned).
    CloseActiveTab,
    /// Cycle to the next tab, wrapping.
    NextTab,
    /// Cycle to the previous tab, wrapping.
    PrevTab,
    /// Jump to the tab at a 1-based strip position.
    ActivateIndex(usize),
}

/// Resolve a key combo against the shortcut table:
/// Ctrl+W closes, Ctrl+Tab / Ctrl+Shift+Tab cycle, Alt+1..9 jump by position.
pub fn command_for(combo: &KeyCombo) -> Option<StripCommand> {
    match combo.key {
        Key::Char('w') if combo.ctrl && !combo.alt && !combo.shift => {
            Some(StripCommand::CloseActiveTab)
        }
        Key::Tab if combo.ctrl && !combo.alt => {
            if combo.shift {
                Some(StripCommand::PrevTab)
            } else {
                Some(StripCommand::NextTab)
            }
        }
        Key::Char(c) if combo.alt && !combo.ctrl && !combo.shift => c
            .to_digit(10)
            .filter(|n| (1..=9).contains(n))
            .map(|n| StripCommand::ActivateIndex(n as usize)),
        _ => None,
    }
}

/// Execute a strip command against the state machine.
pub fn apply_command(manager: &mut TabManager, command: StripCommand) {
    match command {
        StripCommand::CloseActiveTab => {
            if let Some(id) = manager.active_tab_id() {
                manager.close_tab(id);
            }
        }
        StripCommand::NextTab => manager.next_tab(),
        StripCommand::PrevTab => manager.prev_tab(),
        StripCommand::ActivateIndex(index) => manager.activate_index(index),
    }
}
