//! Input processing for the terminal view.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application stays agnostic about concrete key bindings or the specifics
//! of `crossterm` events.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Show the next car class.
    CycleClass,
    /// Hide the login banner.
    DismissAlert,
    None,
}

#[derive(Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Tab => KeyAction::CycleClass,
            KeyCode::Enter => KeyAction::DismissAlert,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                'c' => KeyAction::CycleClass,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }
}
