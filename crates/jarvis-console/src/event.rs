//! Event handling for crossterm terminal events
//!
//! Polls for keyboard, resize, and tick events, and classifies key events
//! for the console. Plain characters belong to the input buffer, so quit is
//! Esc/Ctrl+C rather than a letter key.

use crate::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Application events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Key press event
    Key(KeyEvent),
    /// Timer tick for outcome draining and redraw
    Tick,
    /// Terminal resize event
    Resize(u16, u16),
}

/// Poll for the next event with timeout
pub fn poll_event(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        match event::read()? {
            // Ignore key release/repeat events reported by some terminals
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(AppEvent::Key(key))),
            Event::Resize(width, height) => Ok(Some(AppEvent::Resize(width, height))),
            _ => Ok(Some(AppEvent::Tick)),
        }
    } else {
        Ok(Some(AppEvent::Tick))
    }
}

/// Check if a key event is a quit command (Esc or Ctrl+C)
pub fn is_quit_event(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if a key event submits the current input (Enter)
pub fn is_submit_event(key: KeyEvent) -> bool {
    key.code == KeyCode::Enter
}

/// Check if a key event selects the next agent (Tab)
pub fn is_next_agent_event(key: KeyEvent) -> bool {
    key.code == KeyCode::Tab && !key.modifiers.contains(KeyModifiers::SHIFT)
}

/// Check if a key event selects the previous agent (Shift+Tab)
pub fn is_prev_agent_event(key: KeyEvent) -> bool {
    key.code == KeyCode::BackTab
        || (key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT))
}

/// Log scroll direction and amount for a key event, if any
pub fn scroll_amount(key: KeyEvent) -> Option<(bool, usize)> {
    match key.code {
        KeyCode::Up => Some((true, 1)),
        KeyCode::Down => Some((false, 1)),
        KeyCode::PageUp => Some((true, 10)),
        KeyCode::PageDown => Some((false, 10)),
        _ => None,
    }
}

/// Extract an input edit from a key event, if it is one
pub fn input_edit(key: KeyEvent) -> Option<InputEdit> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEdit::Insert(c))
        }
        KeyCode::Backspace => Some(InputEdit::DeleteBack),
        _ => None,
    }
}

/// Edits applied to the input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    DeleteBack,
}
