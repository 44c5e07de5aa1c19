use bubble_widgets::key::{Binding, KeyCombination, KeyMap};
use crossterm::event::KeyCode;

/// Every key the game reacts to.
pub struct GameKeys {
    pub swap: Binding,
    pub keep: Binding,
    pub ascending: Binding,
    pub descending: Binding,
    pub flip_order: Binding,
    pub more: Binding,
    pub fewer: Binding,
    pub digits: Binding,
    pub reset: Binding,
    pub help: Binding,
    pub quit: Binding,
}

impl GameKeys {
    /// Decisions make no sense on a sorted row.
    pub fn set_finished(&mut self, finished: bool) {
        self.swap.set_enabled(!finished);
        self.keep.set_enabled(!finished);
    }
}

impl Default for GameKeys {
    fn default() -> Self {
        Self {
            swap: Binding::new(
                vec![
                    KeyCombination::char('y'),
                    KeyCombination::char('s'),
                    KeyCombination::new(KeyCode::Enter),
                ],
                "y/s/enter",
                "swap",
            ),
            keep: Binding::new(
                vec![KeyCombination::char('n'), KeyCombination::char(' ')],
                "n/space",
                "no swap",
            ),
            ascending: Binding::new(vec![KeyCombination::char('a')], "a", "ascending"),
            descending: Binding::new(vec![KeyCombination::char('d')], "d", "descending"),
            flip_order: Binding::new(
                vec![KeyCombination::new(KeyCode::Tab)],
                "tab",
                "flip direction",
            ),
            more: Binding::new(
                vec![
                    KeyCombination::char('+'),
                    KeyCombination::char('='),
                    KeyCombination::new(KeyCode::Up),
                ],
                "+/\u{2191}",
                "more tiles",
            ),
            fewer: Binding::new(
                vec![KeyCombination::char('-'), KeyCombination::new(KeyCode::Down)],
                "-/\u{2193}",
                "fewer tiles",
            ),
            digits: Binding::new(
                ('0'..='9').map(KeyCombination::char).collect(),
                "2-9/0",
                "set tile count (0 = 10)",
            ),
            reset: Binding::new(vec![KeyCombination::char('r')], "r", "reshuffle"),
            help: Binding::new(vec![KeyCombination::char('?')], "?", "help"),
            quit: Binding::new(
                vec![
                    KeyCombination::char('q'),
                    KeyCombination::new(KeyCode::Esc),
                    KeyCombination::ctrl(KeyCode::Char('c')),
                ],
                "q/esc",
                "quit",
            ),
        }
    }
}

impl KeyMap for GameKeys {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.swap, &self.keep, &self.flip_order, &self.reset, &self.help, &self.quit]
    }

    fn full_help(&self) -> Vec<(&'static str, Vec<&Binding>)> {
        vec![
            ("Decide", vec![&self.swap, &self.keep]),
            (
                "Setup",
                vec![
                    &self.ascending,
                    &self.descending,
                    &self.flip_order,
                    &self.more,
                    &self.fewer,
                    &self.digits,
                ],
            ),
            ("Game", vec![&self.reset, &self.help, &self.quit]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn finished_disables_decisions_only() {
        let mut keys = GameKeys::default();
        keys.set_finished(true);
        assert!(!keys.swap.matches(&press('y')));
        assert!(!keys.keep.matches(&press('n')));
        assert!(keys.reset.matches(&press('r')));

        keys.set_finished(false);
        assert!(keys.swap.matches(&press('y')));
    }

    #[test]
    fn digits_cover_zero_to_nine() {
        let keys = GameKeys::default();
        for c in '0'..='9' {
            assert!(keys.digits.matches(&press(c)));
        }
        assert!(!keys.digits.matches(&press('a')));
    }

    #[test]
    fn no_key_is_bound_twice() {
        let keys = GameKeys::default();
        let mut seen = Vec::new();
        for (_, group) in keys.full_help() {
            for binding in group {
                for combo in &binding.keys {
                    assert!(!seen.contains(combo), "{combo:?} bound twice");
                    seen.push(*combo);
                }
            }
        }
    }
}
