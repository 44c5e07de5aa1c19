//! A row of bordered number tiles.  Like a plain ratatui widget it holds no
//! state; build one per frame from the current sequence.

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Columns taken by a single tile, borders included.
pub const TILE_WIDTH: u16 = 6;
/// Rows taken by a tile.
pub const TILE_HEIGHT: u16 = 3;

#[derive(Debug, Clone)]
struct TilesStyle {
    /// Tiles outside the highlighted pair.
    normal: Style,
    /// The two tiles under comparison.
    highlight: Style,
    /// Every tile once the row is sorted.
    done: Style,
}

impl Default for TilesStyle {
    fn default() -> Self {
        Self {
            normal: Style::default().fg(Color::White),
            highlight: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            done: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Renders `values` as a horizontally centered row of tiles.
///
/// ```ignore
/// use bubble_widgets::tiles::Tiles;
///
/// Tiles::new(&[3, 1, 2]).highlight(0, 1).render(frame, area);
/// ```
pub struct Tiles<'a> {
    values: &'a [u8],
    highlight: Option<(usize, usize)>,
    done: bool,
    style: TilesStyle,
}

impl<'a> Tiles<'a> {
    pub fn new(values: &'a [u8]) -> Self {
        Self {
            values,
            highlight: None,
            done: false,
            style: TilesStyle::default(),
        }
    }

    /// Mark the tiles at `left` and `right` as the compared pair.
    pub fn highlight(mut self, left: usize, right: usize) -> Self {
        self.highlight = Some((left, right));
        self
    }

    /// Draw every tile in the done style and drop the highlight.
    pub fn done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    fn style_for(&self, index: usize) -> Style {
        if self.done {
            return self.style.done;
        }
        match self.highlight {
            Some((l, r)) if index == l || index == r => self.style.highlight,
            _ => self.style.normal,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let constraints = self.values.iter().map(|_| Constraint::Length(TILE_WIDTH));
        let cells = Layout::horizontal(constraints)
            .flex(Flex::Center)
            .split(area);

        for (index, (value, cell)) in self.values.iter().zip(cells.iter()).enumerate() {
            let style = self.style_for(index);
            let tile = Paragraph::new(value.to_string())
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::bordered().border_style(style));
            frame.render_widget(tile, *cell);
        }
    }
}
