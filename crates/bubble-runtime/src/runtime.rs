use crate::command::CommandInner;
use crate::event::TerminalEvent;
use crate::model::Model;
use crossterm::{
    cursor,
    event::EventStream,
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Errors that can occur while initializing or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, input, rendering, or teardown.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration options for a [`Program`].
///
/// Override only what you need with struct update syntax:
///
/// ```rust,ignore
/// let opts = ProgramOptions {
///     fps: 30,
///     alt_screen: false,
///     ..ProgramOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Target frames per second (default: 60, clamped to 1..=120).
    pub fps: u32,
    /// Draw on the alternate screen (default: true).
    pub alt_screen: bool,
    /// Restore the terminal before the default panic output (default: true).
    pub catch_panics: bool,
    /// Exit cleanly on SIGINT (default: true).
    pub handle_signals: bool,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            alt_screen: true,
            catch_panics: true,
            handle_signals: true,
        }
    }
}

/// Drives a [`Model`] against the real terminal until it quits.
///
/// ```rust,ignore
/// #[tokio::main]
/// async fn main() -> Result<(), bubble_runtime::ProgramError> {
///     let model = Program::<App>::new(flags)?.run().await?;
///     // `model` is the final state after quit
///     Ok(())
/// }
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    options: ProgramOptions,
    needs_redraw: bool,
    should_quit: bool,
}

impl<M: Model> Program<M> {
    /// Create a program with default options.
    ///
    /// Returns an error if terminal initialization fails.
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Create a program with custom options.
    ///
    /// Returns an error if terminal initialization fails.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        let (model, init_cmd) = M::init(flags);
        let terminal = init_terminal(&options)?;

        let mut program = Self {
            model,
            terminal,
            options,
            needs_redraw: true,
            should_quit: false,
        };
        debug!(fps = program.options.fps, alt_screen = program.options.alt_screen, "program initialized");
        program.execute_command(init_cmd.inner);
        Ok(program)
    }

    /// Run until the model quits.  Returns the final model.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let result = self.event_loop().await;

        info!("shutting down");
        restore_terminal(self.options.alt_screen)?;
        result?;
        Ok(self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        self.render()?;

        let fps = self.options.fps.clamp(1, 120);
        let mut frame_interval = tokio::time::interval(Duration::from_secs_f64(1.0 / fps as f64));
        frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut events = EventStream::new();
        let handle_signals = self.options.handle_signals;

        while !self.should_quit {
            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c(), if handle_signals => {
                    info!("received ctrl+c signal");
                    return Ok(());
                }

                event = events.next() => match event {
                    Some(Ok(event)) => self.process_event(event),
                    Some(Err(err)) => return Err(err.into()),
                    None => {
                        warn!("terminal input closed");
                        return Ok(());
                    }
                },

                _ = frame_interval.tick() => {
                    if self.needs_redraw {
                        self.render()?;
                        self.needs_redraw = false;
                    }
                }
            }
        }
        Ok(())
    }

    fn process_event(&mut self, event: crossterm::event::Event) {
        let Some(event) = TerminalEvent::from_crossterm(event) else {
            return;
        };
        if let TerminalEvent::Resize(w, h) = event {
            debug!(w, h, "terminal resized");
            self.needs_redraw = true;
        }
        if let Some(msg) = self.model.handle_event(&event) {
            let cmd = self.model.update(msg);
            self.execute_command(cmd.inner);
            self.needs_redraw = true;
        }
    }

    fn execute_command(&mut self, cmd: CommandInner) {
        match cmd {
            CommandInner::None => {}
            CommandInner::Quit => {
                debug!("quit requested");
                self.should_quit = true;
            }
            CommandInner::SetTitle(title) => {
                if let Err(err) = execute!(stdout(), SetTitle(&title)) {
                    warn!(%err, "failed to set terminal title");
                }
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd);
                }
            }
        }
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| {
            self.model.view(frame);
        })?;
        Ok(())
    }
}

fn init_terminal(options: &ProgramOptions) -> Result<Terminal<CrosstermBackend<Stdout>>, ProgramError> {
    // Install the restoring panic hook only once to avoid stacking.
    if options.catch_panics {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        HOOK_INSTALLED.call_once(|| {
            let previous_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal(alt_screen);
                previous_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut writer = stdout();
    if options.alt_screen {
        execute!(writer, EnterAlternateScreen)?;
    }
    execute!(writer, cursor::Hide)?;

    Ok(Terminal::new(CrosstermBackend::new(writer))?)
}

fn restore_terminal(alt_screen: bool) -> Result<(), std::io::Error> {
    // Best effort: keep restoring even if one step fails, then report the
    // raw mode failure, which is the one that leaves the shell unusable.
    let raw = disable_raw_mode();
    let mut writer = stdout();
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = ProgramOptions::default();
        assert_eq!(opts.fps, 60);
        assert!(opts.alt_screen);
        assert!(opts.catch_panics);
        assert!(opts.handle_signals);
    }

    #[test]
    fn io_error_converts() {
        let err: ProgramError = std::io::Error::other("boom").into();
        assert!(err.to_string().contains("boom"));
    }
}
