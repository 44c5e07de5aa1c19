use crate::command::CommandInner;
use crate::event::TerminalEvent;
use crate::model::Model;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// A headless harness that drives a [`Model`] without a real terminal.
///
/// Titles requested with [`Command::set_title`](crate::Command::set_title)
/// are recorded.  A [`Command::quit`](crate::Command::quit) is remembered
/// rather than acted on, so tests can keep inspecting the model afterwards.
///
/// ```rust,ignore
/// use bubble_runtime::testing::TestProgram;
/// use crossterm::event::KeyCode;
///
/// let mut prog = TestProgram::<App>::new(settings);
/// prog.press(KeyCode::Char('y'));
/// assert_eq!(prog.model().game().comparisons(), 1);
/// assert!(prog.render_string(60, 20).contains("Comparisons: 1"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    titles: Vec<String>,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Call [`Model::init`] and collect its startup command.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            titles: Vec::new(),
            quit_requested: false,
        };
        program.collect(init_cmd.inner);
        program
    }

    /// Run one update cycle for `msg`.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd.inner);
    }

    /// Offer `event` to [`Model::handle_event`] and, if it maps to a message,
    /// run the update.  Returns whether the event was handled.
    pub fn send_event(&mut self, event: TerminalEvent) -> bool {
        match self.model.handle_event(&event) {
            Some(msg) => {
                self.send(msg);
                true
            }
            None => false,
        }
    }

    /// Shorthand for [`send_event`](TestProgram::send_event) with a plain
    /// key press.
    pub fn press(&mut self, code: crossterm::event::KeyCode) -> bool {
        self.send_event(TerminalEvent::key(code))
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Direct access for arranging state, bypassing `update`.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Whether any command so far asked the program to quit.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Terminal titles requested so far, oldest first.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Render to a [`Buffer`] of the given size.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend cannot fail");
        terminal
            .draw(|frame| self.model.view(frame))
            .expect("test backend cannot fail");
        terminal.backend().buffer().clone()
    }

    /// Render and return the visible cells as text, one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = buf.area;
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                output.push_str(buf[(x, y)].symbol());
            }
            if y + 1 < area.bottom() {
                output.push('\n');
            }
        }
        output
    }

    fn collect(&mut self, cmd: CommandInner) {
        match cmd {
            CommandInner::None => {}
            CommandInner::Quit => self.quit_requested = true,
            CommandInner::SetTitle(title) => self.titles.push(title),
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
        }
    }
}
