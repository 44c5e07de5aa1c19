//! Terminal runtime for the bubble sort drill.
//!
//! The design follows the [Elm Architecture]: the application is a
//! [`Model`] whose state changes only inside [`Model::update`], and whose
//! screen is redrawn from scratch by [`Model::view`] after every change.
//! Terminal input reaches the model through [`Model::handle_event`], which
//! maps a raw [`TerminalEvent`] to one of the model's own messages.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Follow-up work returned from `update`: set the title, or quit |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] |
//!
//! Every transition happens synchronously on the loop; tokio only waits for
//! input, signals and the frame timer.
//!
//! Start a session with [`run_with`].
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{Program, ProgramError, ProgramOptions};

/// Run a model with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
