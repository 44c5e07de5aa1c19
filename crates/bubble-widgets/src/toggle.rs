//! A row of mutually exclusive options, one of which is always selected.

use bubble_runtime::Component;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Messages for the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Select the option at this index.  Out-of-range indices are ignored.
    Select(usize),
    /// Select the next option, wrapping around.
    Next,
}

/// Visual style configuration for [`Toggle`].
#[derive(Debug, Clone)]
struct ToggleStyle {
    normal: Style,
    selected: Style,
    gap: String,
}

impl Default for ToggleStyle {
    fn default() -> Self {
        Self {
            normal: Style::default().fg(Color::Gray).bg(Color::DarkGray),
            selected: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            gap: "  ".to_string(),
        }
    }
}

pub struct Toggle {
    options: Vec<String>,
    selected: usize,
    style: ToggleStyle,
}

impl Toggle {
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selected: 0,
            style: ToggleStyle::default(),
        }
    }

    pub fn with_selected(mut self, index: usize) -> Self {
        self.select(index);
        self
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select `index`.  No-op if out of bounds.
    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }
}

impl Component for Toggle {
    type Message = Message;

    fn update(&mut self, msg: Message) -> bool {
        let before = self.selected;
        match msg {
            Message::Select(i) => self.select(i),
            Message::Next => self.select_next(),
        }
        self.selected != before
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(self.options.len() * 2);
        for (i, option) in self.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(self.style.gap.clone()));
            }
            let style = if i == self.selected {
                self.style.selected
            } else {
                self.style.normal
            };
            spans.push(Span::styled(format!(" {option} "), style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
