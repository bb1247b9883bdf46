//! Key mapping from terminal events to loop signals.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What an input event means to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Quit,
    Resize,
}

/// Check if key should quit the animation.
///
/// Raw mode turns Ctrl-C into an ordinary key press, so it is handled here
/// alongside `q`/`Q`.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a terminal event to a loop signal.
pub fn classify(event: &Event) -> Option<Signal> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release && should_quit(*key) => {
            Some(Signal::Quit)
        }
        Event::Resize(_, _) => Some(Signal::Resize),
        _ => None,
    }
}
