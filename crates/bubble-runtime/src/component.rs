use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`].
///
/// A parent [`Model`](crate::Model) owns its components, wraps their messages
/// in one of its own message variants, and reacts when a component reports
/// that its value changed:
///
/// ```rust,ignore
/// fn update(&mut self, msg: Msg) -> Command<Msg> {
///     match msg {
///         Msg::Count(m) => {
///             if self.count.update(m) {
///                 self.game.resize(self.count.value());
///             }
///             Command::none()
///         }
///         // ...
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's own message type.
    type Message: Send + 'static;

    /// Process a message.  Returns `true` if the component's value changed.
    fn update(&mut self, msg: Self::Message) -> bool;

    /// Render inside `area`, and nowhere else.
    fn view(&self, frame: &mut Frame, area: Rect);
}
