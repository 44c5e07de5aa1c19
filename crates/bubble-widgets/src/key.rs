//! Key bindings, the [`KeyMap`] trait, and a one-line hint renderer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// A single key press with the modifier keys that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombination {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombination {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }
}

/// One or more key combinations that trigger a described action.
#[derive(Debug, Clone)]
pub struct Binding {
    pub keys: Vec<KeyCombination>,
    /// Short key label for display, e.g. `"y/enter"`.
    pub label: String,
    pub description: String,
    /// Disabled bindings never match and are drawn dimmed.
    pub enabled: bool,
}

impl Binding {
    pub fn new(
        keys: Vec<KeyCombination>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            keys,
            label: label.into(),
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether `event` triggers this binding.
    ///
    /// Extra modifiers are tolerated, so shifted punctuation such as `+` or
    /// `?` matches a plain binding.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.enabled
            && self
                .keys
                .iter()
                .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Types that expose their key bindings for the hint line and help overlay.
pub trait KeyMap {
    /// The most important bindings, for the one-line hint.
    fn short_help(&self) -> Vec<&Binding>;
    /// Every binding, grouped under a heading, for the full overlay.
    fn full_help(&self) -> Vec<(&'static str, Vec<&Binding>)>;
}

#[derive(Debug, Clone)]
struct KeyHintsStyle {
    key: Style,
    description: Style,
    disabled: Style,
    separator: String,
}

impl Default for KeyHintsStyle {
    fn default() -> Self {
        Self {
            key: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            description: Style::default().fg(Color::Gray),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            separator: " \u{2022} ".to_string(),
        }
    }
}

/// Hint line listing bindings as `key description • key description`.
pub struct KeyHints<'a> {
    bindings: Vec<&'a Binding>,
    style: KeyHintsStyle,
}

impl<'a> KeyHints<'a> {
    pub fn new(bindings: Vec<&'a Binding>) -> Self {
        Self {
            bindings,
            style: KeyHintsStyle::default(),
        }
    }

    pub fn line(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for (i, b) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(self.style.separator.clone(), self.style.description));
            }
            let (key, desc) = if b.enabled {
                (self.style.key, self.style.description)
            } else {
                (self.style.disabled, self.style.disabled)
            };
            spans.push(Span::styled(b.label.clone(), key));
            spans.push(Span::styled(format!(" {}", b.description), desc));
        }
        Line::from(spans)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap() -> Binding {
        Binding::new(
            vec![KeyCombination::char('y'), KeyCombination::new(KeyCode::Enter)],
            "y/enter",
            "swap",
        )
    }

    #[test]
    fn matches_any_listed_key() {
        let b = swap();
        assert!(b.matches(&KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE)));
        assert!(b.matches(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!b.matches(&KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE)));
    }

    #[test]
    fn shifted_punctuation_matches() {
        let b = Binding::new(vec![KeyCombination::char('+')], "+", "more");
        assert!(b.matches(&KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn ctrl_binding_requires_ctrl() {
        let b = Binding::new(vec![KeyCombination::ctrl(KeyCode::Char('c'))], "ctrl+c", "quit");
        assert!(b.matches(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn disabled_never_matches() {
        let mut b = swap();
        b.set_enabled(false);
        assert!(!b.matches(&KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE)));
    }

    #[test]
    fn hint_line_lists_bindings() {
        let a = swap();
        let b = Binding::new(vec![KeyCombination::char('r')], "r", "reset");
        let text = KeyHints::new(vec![&a, &b]).line().to_string();
        assert_eq!(text, "y/enter swap \u{2022} r reset");
    }

    #[test]
    fn disabled_binding_is_dimmed() {
        let mut a = swap();
        a.set_enabled(false);
        let line = KeyHints::new(vec![&a]).line();
        assert_eq!(line.spans[0].style, KeyHintsStyle::default().disabled);
    }
}
