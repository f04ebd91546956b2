use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Key;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Key(Key),
    Resize { width: u16, height: u16 },
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, waiting at most `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate_event(event::read()?))
}

fn translate_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            translate_key(key_event).map(TuiEvent::Key)
        }
        Event::Resize(width, height) => Some(TuiEvent::Resize { width, height }),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<Key> {
    // Release events show up on terminals with keyboard enhancement enabled.
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Key::Interrupt),
        (_, KeyCode::Char(c)) => Some(Key::Char(c)),
        (_, KeyCode::Enter) => Some(Key::Enter),
        (_, KeyCode::Esc) => Some(Key::Esc),
        (_, KeyCode::Backspace) => Some(Key::Backspace),
        (_, KeyCode::Delete) => Some(Key::Delete),
        (_, KeyCode::Left) => Some(Key::Left),
        (_, KeyCode::Right) => Some(Key::Right),
        (_, KeyCode::Up) => Some(Key::Up),
        (_, KeyCode::Down) => Some(Key::Down),
        (_, KeyCode::Home) => Some(Key::Home),
        (_, KeyCode::End) => Some(Key::End),
        (_, KeyCode::PageUp) => Some(Key::PageUp),
        (_, KeyCode::PageDown) => Some(Key::PageDown),
        _ => None,
    }
}
