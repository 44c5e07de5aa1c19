use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Terminal input delivered to [`Model::handle_event`](crate::Model::handle_event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key press.  Release and repeat events are never delivered.
    Key(KeyEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
}

impl TerminalEvent {
    /// Convert a crossterm event, dropping the kinds the runtime ignores
    /// (mouse, paste, non-press key events).
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(TerminalEvent::Key(key)),
            Event::Key(_) => None,
            Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            Event::FocusGained => Some(TerminalEvent::FocusGained),
            Event::FocusLost => Some(TerminalEvent::FocusLost),
            Event::Mouse(_) | Event::Paste(_) => None,
        }
    }

    /// Shorthand for a plain key press, as produced by a terminal.
    pub fn key(code: KeyCode) -> Self {
        TerminalEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Shorthand for a key press with modifiers held.
    pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Self {
        TerminalEvent::Key(KeyEvent::new(code, modifiers))
    }

    /// The key code, if this is a key press.
    pub fn key_code(&self) -> Option<KeyCode> {
        match self {
            TerminalEvent::Key(key) => Some(key.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn press_is_forwarded() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE));
        assert_eq!(
            TerminalEvent::from_crossterm(ev),
            Some(TerminalEvent::key(KeyCode::Char('y')))
        );
    }

    #[test]
    fn release_is_dropped() {
        let key = KeyEvent {
            code: KeyCode::Char('y'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(TerminalEvent::from_crossterm(Event::Key(key)), None);
    }

    #[test]
    fn paste_is_dropped() {
        assert_eq!(TerminalEvent::from_crossterm(Event::Paste("3".into())), None);
    }

    #[test]
    fn resize_is_forwarded() {
        assert_eq!(
            TerminalEvent::from_crossterm(Event::Resize(80, 24)),
            Some(TerminalEvent::Resize(80, 24))
        );
    }

    #[test]
    fn key_code_only_for_keys() {
        assert_eq!(
            TerminalEvent::key(KeyCode::Enter).key_code(),
            Some(KeyCode::Enter)
        );
        assert_eq!(TerminalEvent::FocusLost.key_code(), None);
    }
}
