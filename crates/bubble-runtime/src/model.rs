use crate::command::Command;
use crate::event::TerminalEvent;
use ratatui::Frame;

/// The top-level application trait.
///
/// The runtime drives a continuous **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) builds the initial state from the startup flags.
/// 2. [`view`](Model::view) renders the current state.
/// 3. Each terminal event is offered to [`handle_event`](Model::handle_event);
///    a returned message is passed to [`update`](Model::update).
/// 4. Any [`Command`] returned by `update` is executed, and the screen is
///    marked dirty for the next frame.
///
/// # Example
///
/// ```rust,ignore
/// use bubble_runtime::{Command, Model, TerminalEvent};
/// use crossterm::event::KeyCode;
/// use ratatui::{widgets::Paragraph, Frame};
///
/// struct Flip { on: bool }
///
/// enum Msg { Flip, Quit }
///
/// impl Model for Flip {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<Msg>) {
///         (Flip { on: false }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Flip => self.on = !self.on,
///             Msg::Quit => return Command::quit(),
///         }
///         Command::none()
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         frame.render_widget(Paragraph::new(format!("on: {}", self.on)), frame.area());
///     }
///
///     fn handle_event(&self, event: &TerminalEvent) -> Option<Msg> {
///         match event.key_code()? {
///             KeyCode::Char(' ') => Some(Msg::Flip),
///             KeyCode::Char('q') => Some(Msg::Quit),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Model: Sized + Send + 'static {
    /// Every event that can affect the application state.
    type Message: Send + 'static;

    /// Startup data passed to [`Model::init`].  Use `()` when none is needed.
    type Flags: Send + 'static;

    /// Create the initial state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return follow-up work.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state.  Must be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);

    /// Translate a terminal event into a message, or drop it with `None`.
    ///
    /// The default drops everything.
    fn handle_event(&self, _event: &TerminalEvent) -> Option<Self::Message> {
        None
    }
}
