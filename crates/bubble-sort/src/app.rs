use crate::keymap::GameKeys;
use bubble_game::{Game, SortOrder, Step, DEFAULT_COUNT, MAX_COUNT, MIN_COUNT};
use bubble_runtime::{Command, Component, Model, TerminalEvent};
use bubble_widgets::help::HelpOverlay;
use bubble_widgets::key::{KeyHints, KeyMap};
use bubble_widgets::number_input::{self, NumberInput};
use bubble_widgets::tiles::{Tiles, TILE_HEIGHT};
use bubble_widgets::toggle::{self, Toggle};
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use tracing::{debug, info};

pub const TITLE: &str = "Bubble Sort";

/// Startup configuration for [`App`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub count: usize,
    pub order: SortOrder,
    /// Fixed shuffle seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            order: SortOrder::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Swap (`true`) or keep (`false`) the highlighted pair.
    Decide(bool),
    Count(number_input::Message),
    Order(toggle::Message),
    Reset,
    ToggleHelp,
    Quit,
}

pub struct App {
    game: Game,
    count: NumberInput,
    order: Toggle,
    keys: GameKeys,
    show_help: bool,
}

impl App {
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// One line describing how the session ended.
    pub fn summary(&self) -> String {
        let g = &self.game;
        if g.is_finished() {
            format!(
                "Sorted {} tiles {} in {} comparisons over {} rounds.",
                g.len(),
                g.order(),
                g.comparisons(),
                g.rounds()
            )
        } else {
            format!(
                "Stopped after {} comparisons over {} rounds; {:?} is not yet {}.",
                g.comparisons(),
                g.rounds(),
                g.sequence(),
                g.order()
            )
        }
    }

    fn title(&self) -> String {
        if self.game.is_finished() {
            format!("{TITLE}: sorted!")
        } else {
            TITLE.to_string()
        }
    }

    fn apply(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Decide(swap) => {
                match self.game.decide(swap) {
                    Step::Ignored => debug!("decision ignored, already sorted"),
                    Step::Taken {
                        swapped,
                        pass_complete,
                        finished,
                    } => {
                        debug!(
                            swapped,
                            comparisons = self.game.comparisons(),
                            sequence = ?self.game.sequence(),
                            "decision"
                        );
                        if pass_complete {
                            debug!(rounds = self.game.rounds(), "pass complete");
                        }
                        if finished {
                            info!(
                                comparisons = self.game.comparisons(),
                                rounds = self.game.rounds(),
                                "sequence sorted"
                            );
                        }
                    }
                }
                Command::none()
            }
            Msg::Count(m) => {
                if self.count.update(m) {
                    info!(from = self.game.len(), to = self.count.value(), "tile count changed");
                    self.game.resize(self.count.value());
                }
                Command::none()
            }
            Msg::Order(m) => {
                if self.order.update(m) {
                    let order = SortOrder::from_index(self.order.selected());
                    info!(%order, "sort order changed");
                    self.game.set_order(order);
                }
                Command::none()
            }
            Msg::Reset => {
                info!(count = self.game.len(), "reshuffled");
                self.game.reset();
                Command::none()
            }
            Msg::ToggleHelp => {
                self.show_help = !self.show_help;
                Command::none()
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn status_lines(&self) -> Vec<Line<'static>> {
        let g = &self.game;
        if g.is_finished() {
            vec![
                Line::from(Span::styled(
                    "Sorted!",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::raw(format!("Total comparisons: {}", g.comparisons())),
                Line::raw(format!("Total rounds: {}", g.rounds())),
            ]
        } else if g.is_stalled() {
            let warn = Style::default().fg(Color::Yellow);
            vec![
                Line::from(Span::styled("This pass no longer reaches the unsorted tiles.", warn)),
                Line::from(Span::styled("Press r to reshuffle and start over.", warn)),
            ]
        } else {
            Vec::new()
        }
    }

    fn prompt(&self) -> Line<'static> {
        let g = &self.game;
        if g.is_finished() {
            return Line::raw("");
        }
        let (l, r) = g.pair();
        let seq = g.sequence();
        let rule = match g.order() {
            SortOrder::Ascending => "smaller first",
            SortOrder::Descending => "larger first",
        };
        Line::from(vec![
            Span::raw("Swap "),
            Span::styled(seq[l].to_string(), Style::default().fg(Color::Yellow)),
            Span::raw(" and "),
            Span::styled(seq[r].to_string(), Style::default().fg(Color::Yellow)),
            Span::raw(format!("?  ({rule})")),
        ])
    }
}

impl Model for App {
    type Message = Msg;
    type Flags = Settings;

    fn init(settings: Settings) -> (Self, Command<Msg>) {
        let game = match settings.seed {
            Some(seed) => Game::seeded(settings.count, settings.order, seed),
            None => Game::new(settings.count, settings.order),
        };
        info!(count = game.len(), order = %game.order(), seed = ?settings.seed, "new game");

        let app = App {
            count: NumberInput::new("Tiles", game.len(), MIN_COUNT, MAX_COUNT),
            order: Toggle::new(vec!["Ascending \u{2191}".into(), "Descending \u{2193}".into()])
                .with_selected(game.order().index()),
            keys: GameKeys::default(),
            show_help: false,
            game,
        };
        let title = app.title();
        (app, Command::set_title(title))
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        let was_finished = self.game.is_finished();
        let cmd = self.apply(msg);
        let finished = self.game.is_finished();
        if finished == was_finished {
            return cmd;
        }
        self.keys.set_finished(finished);
        Command::batch([cmd, Command::set_title(self.title())])
    }

    fn view(&self, frame: &mut Frame) {
        let outer = Block::bordered()
            .title(format!(" {TITLE} "))
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = outer.inner(frame.area());
        frame.render_widget(outer, frame.area());

        let [count, order, _, tiles, prompt, _, comparisons, rounds, _, status, _, hints] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(TILE_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        self.count.view(frame, count);
        self.order.view(frame, order);

        let (l, r) = self.game.pair();
        Tiles::new(self.game.sequence())
            .highlight(l, r)
            .done(self.game.is_finished())
            .render(frame, tiles);

        frame.render_widget(Paragraph::new(self.prompt()).alignment(Alignment::Center), prompt);
        frame.render_widget(
            Paragraph::new(format!("Comparisons: {}", self.game.comparisons())),
            comparisons,
        );
        frame.render_widget(
            Paragraph::new(format!("Rounds: {}", self.game.rounds())),
            rounds,
        );
        frame.render_widget(
            Paragraph::new(self.status_lines()).alignment(Alignment::Center),
            status,
        );

        KeyHints::new(self.keys.short_help()).render(frame, hints);

        if self.show_help {
            HelpOverlay::new(&self.keys).render(frame, inner);
        }
    }

    fn handle_event(&self, event: &TerminalEvent) -> Option<Msg> {
        let TerminalEvent::Key(key) = event else {
            return None;
        };
        let k = &self.keys;

        if self.show_help {
            return if k.help.matches(key) || key.code == KeyCode::Esc {
                Some(Msg::ToggleHelp)
            } else if k.quit.matches(key) {
                Some(Msg::Quit)
            } else {
                None
            };
        }

        if k.quit.matches(key) {
            Some(Msg::Quit)
        } else if k.help.matches(key) {
            Some(Msg::ToggleHelp)
        } else if k.swap.matches(key) {
            Some(Msg::Decide(true))
        } else if k.keep.matches(key) {
            Some(Msg::Decide(false))
        } else if k.ascending.matches(key) {
            Some(Msg::Order(toggle::Message::Select(SortOrder::Ascending.index())))
        } else if k.descending.matches(key) {
            Some(Msg::Order(toggle::Message::Select(SortOrder::Descending.index())))
        } else if k.flip_order.matches(key) {
            Some(Msg::Order(toggle::Message::Next))
        } else if k.more.matches(key) {
            Some(Msg::Count(number_input::Message::Increment))
        } else if k.fewer.matches(key) {
            Some(Msg::Count(number_input::Message::Decrement))
        } else if k.digits.matches(key) {
            match key.code {
                KeyCode::Char(c) => c
                    .to_digit(10)
                    .map(|d| Msg::Count(number_input::Message::Digit(d as u8))),
                _ => None,
            }
        } else if k.reset.matches(key) {
            Some(Msg::Reset)
        } else {
            None
        }
    }
}
