//! Full key-binding overlay, drawn centered over whatever is below it.

use crate::key::KeyMap;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

#[derive(Debug, Clone)]
struct HelpStyle {
    key: Style,
    description: Style,
    group: Style,
    border: Style,
}

impl Default for HelpStyle {
    fn default() -> Self {
        Self {
            key: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            description: Style::default().fg(Color::White),
            group: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Renders every binding of a [`KeyMap`] in a bordered popup.
pub struct HelpOverlay<'a, K: KeyMap> {
    keymap: &'a K,
    style: HelpStyle,
}

impl<'a, K: KeyMap> HelpOverlay<'a, K> {
    pub fn new(keymap: &'a K) -> Self {
        Self {
            keymap,
            style: HelpStyle::default(),
        }
    }

    /// Content lines: a heading per group, then one line per binding with
    /// the key labels padded to a common column.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let groups = self.keymap.full_help();
        let key_width = groups
            .iter()
            .flat_map(|(_, bindings)| bindings.iter().map(|b| b.label.chars().count()))
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        for (i, (heading, bindings)) in groups.iter().enumerate() {
            if i > 0 {
                lines.push(Line::raw(""));
            }
            lines.push(Line::from(Span::styled(heading.to_string(), self.style.group)));
            for b in bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<key_width$}", b.label), self.style.key),
                    Span::styled(format!("  {}", b.description), self.style.description),
                ]));
            }
        }
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16 + 4;
        let height = lines.len() as u16 + 2;

        let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([Constraint::Length(height.min(area.height))])
            .flex(Flex::Center)
            .areas(popup);

        let block = Block::bordered()
            .title(" Keys ")
            .border_style(self.style.border);
        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{Binding, KeyCombination};

    struct Keys {
        swap: Binding,
        reset: Binding,
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.swap]
        }

        fn full_help(&self) -> Vec<(&'static str, Vec<&Binding>)> {
            vec![("Play", vec![&self.swap]), ("Game", vec![&self.reset])]
        }
    }

    fn keys() -> Keys {
        Keys {
            swap: Binding::new(vec![KeyCombination::char('y')], "y/enter", "swap"),
            reset: Binding::new(vec![KeyCombination::char('r')], "r", "reset"),
        }
    }

    #[test]
    fn groups_and_aligns_bindings() {
        let keys = keys();
        let text: Vec<String> = HelpOverlay::new(&keys)
            .lines()
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(
            text,
            vec![
                "Play".to_string(),
                "  y/enter  swap".to_string(),
                String::new(),
                "Game".to_string(),
                "  r        reset".to_string(),
            ]
        );
    }
}
