//! Bounded integer input, stepped with keys or set by typing a digit.

use bubble_runtime::Component;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Messages for the number input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Step up by one, stopping at the maximum.
    Increment,
    /// Step down by one, stopping at the minimum.
    Decrement,
    /// Set an arbitrary value; out-of-range values are clamped.
    Set(i64),
    /// A typed digit.  `0` stands for 10 when 10 is in range.
    Digit(u8),
}

#[derive(Debug, Clone)]
struct NumberInputStyle {
    label: Style,
    value: Style,
    hint: Style,
}

impl Default for NumberInputStyle {
    fn default() -> Self {
        Self {
            label: Style::default().fg(Color::White),
            value: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            hint: Style::default().fg(Color::DarkGray),
        }
    }
}

/// An integer field restricted to `min..=max`.
pub struct NumberInput {
    label: String,
    value: usize,
    min: usize,
    max: usize,
    style: NumberInputStyle,
}

impl NumberInput {
    /// Create an input over `min..=max` starting at `value` (clamped).
    pub fn new(label: impl Into<String>, value: usize, min: usize, max: usize) -> Self {
        let max = max.max(min);
        Self {
            label: label.into(),
            value: value.clamp(min, max),
            min,
            max,
            style: NumberInputStyle::default(),
        }
    }

    pub fn value(&self) -> usize {
        self.value
    }

    /// Set the value, clamping into range.  Returns whether it changed.
    pub fn set(&mut self, value: i64) -> bool {
        let value = value.clamp(self.min as i64, self.max as i64) as usize;
        let changed = value != self.value;
        self.value = value;
        changed
    }
}

impl Component for NumberInput {
    type Message = Message;

    fn update(&mut self, msg: Message) -> bool {
        match msg {
            Message::Increment => self.set(self.value as i64 + 1),
            Message::Decrement => self.set(self.value as i64 - 1),
            Message::Set(v) => self.set(v),
            Message::Digit(0) if self.max >= 10 => self.set(10),
            Message::Digit(d) => self.set(i64::from(d)),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(format!("{}: ", self.label), self.style.label),
            Span::styled("\u{25c2} ", self.style.hint),
            Span::styled(self.value.to_string(), self.style.value),
            Span::styled(" \u{25b8}", self.style.hint),
            Span::styled(format!("  ({}-{})", self.min, self.max), self.style.hint),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(value: usize) -> NumberInput {
        NumberInput::new("Count", value, 2, 10)
    }

    #[test]
    fn initial_value_is_clamped() {
        assert_eq!(input(0).value(), 2);
        assert_eq!(input(50).value(), 10);
        assert_eq!(input(5).value(), 5);
    }

    #[test]
    fn steps_stop_at_bounds() {
        let mut n = input(9);
        n.update(Message::Increment);
        assert_eq!(n.value(), 10);
        n.update(Message::Increment);
        assert_eq!(n.value(), 10);

        let mut n = input(3);
        n.update(Message::Decrement);
        n.update(Message::Decrement);
        assert_eq!(n.value(), 2);
    }

    #[test]
    fn set_clamps() {
        let mut n = input(5);
        n.update(Message::Set(-3));
        assert_eq!(n.value(), 2);
        n.update(Message::Set(1_000));
        assert_eq!(n.value(), 10);
        n.update(Message::Set(7));
        assert_eq!(n.value(), 7);
    }

    #[test]
    fn digits_map_to_values() {
        let mut n = input(5);
        n.update(Message::Digit(8));
        assert_eq!(n.value(), 8);
        n.update(Message::Digit(1));
        assert_eq!(n.value(), 2);
        n.update(Message::Digit(0));
        assert_eq!(n.value(), 10);
    }

    #[test]
    fn zero_clamps_when_ten_is_out_of_range() {
        let mut n = NumberInput::new("Count", 4, 2, 6);
        n.update(Message::Digit(0));
        assert_eq!(n.value(), 2);
    }

    #[test]
    fn update_reports_changes_only() {
        let mut n = input(9);
        assert!(n.update(Message::Increment));
        assert!(!n.update(Message::Increment));
        assert!(!n.update(Message::Digit(0)));
        assert!(!n.update(Message::Set(10)));
        assert!(n.update(Message::Set(3)));
    }

    #[test]
    fn renders_label_value_and_range() {
        use ratatui::backend::TestBackend;
        use ratatui::Terminal;

        let n = input(7);
        let mut terminal = Terminal::new(TestBackend::new(30, 1)).unwrap();
        terminal.draw(|frame| n.view(frame, frame.area())).unwrap();
        let buf = terminal.backend().buffer();
        let row: String = (0..30).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(row.starts_with("Count: "));
        assert!(row.contains('7'));
        assert!(row.contains("(2-10)"));
    }
}
