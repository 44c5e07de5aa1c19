use std::marker::PhantomData;

/// Follow-up work returned from [`Model::update`](crate::Model::update) or
/// [`Model::init`](crate::Model::init).
///
/// Everything a command can do is synchronous: change the terminal title or
/// stop the program.
///
/// ```rust,ignore
/// // Nothing to do:
/// let cmd = Command::none();
///
/// // Leave the event loop:
/// let cmd = Command::quit();
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner,
    _msg: PhantomData<fn() -> Msg>,
}

pub(crate) enum CommandInner {
    None,
    Quit,
    SetTitle(String),
    Batch(Vec<CommandInner>),
}

impl<Msg: Send + 'static> Command<Msg> {
    fn from_inner(inner: CommandInner) -> Self {
        Command {
            inner,
            _msg: PhantomData,
        }
    }

    /// No-op command.
    pub fn none() -> Self {
        Self::from_inner(CommandInner::None)
    }

    /// Quit the program.
    pub fn quit() -> Self {
        Self::from_inner(CommandInner::Quit)
    }

    /// Set the terminal window title.
    pub fn set_title(title: impl Into<String>) -> Self {
        Self::from_inner(CommandInner::SetTitle(title.into()))
    }

    /// Run several commands, in order.  No-op commands are dropped and a
    /// single remaining command is returned as is.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds
            .into_iter()
            .filter(|c| !c.is_none())
            .map(|c| c.inner)
            .collect();
        match cmds.len() {
            0 => Command::none(),
            1 => Self::from_inner(cmds.remove(0)),
            _ => Self::from_inner(CommandInner::Batch(cmds)),
        }
    }

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// Returns `true` if running this command would stop the program.
    pub fn is_quit(&self) -> bool {
        self.inner.is_quit()
    }
}

impl CommandInner {
    fn is_quit(&self) -> bool {
        match self {
            CommandInner::Quit => true,
            CommandInner::Batch(cmds) => cmds.iter().any(CommandInner::is_quit),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(cmd: &CommandInner) -> Vec<&str> {
        match cmd {
            CommandInner::SetTitle(t) => vec![t.as_str()],
            CommandInner::Batch(cmds) => cmds.iter().flat_map(titles).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn none_is_none() {
        let cmd: Command<()> = Command::none();
        assert!(cmd.is_none());
        assert!(!cmd.is_quit());
    }

    #[test]
    fn quit_is_quit() {
        assert!(Command::<()>::quit().is_quit());
    }

    #[test]
    fn batch_drops_noops() {
        let cmd: Command<i32> = Command::batch([Command::none(), Command::none()]);
        assert!(cmd.is_none());

        let cmd: Command<i32> = Command::batch([Command::none(), Command::set_title("one")]);
        assert!(matches!(cmd.inner, CommandInner::SetTitle(ref t) if t == "one"));
    }

    #[test]
    fn batch_keeps_order() {
        let cmd: Command<i32> = Command::batch([Command::set_title("a"), Command::set_title("b")]);
        assert!(matches!(cmd.inner, CommandInner::Batch(_)));
        assert_eq!(titles(&cmd.inner), vec!["a", "b"]);
    }

    #[test]
    fn batch_containing_quit_is_quit() {
        let cmd: Command<i32> = Command::batch([Command::set_title("bye"), Command::quit()]);
        assert!(cmd.is_quit());
    }

    #[test]
    fn nested_batches_run_in_order() {
        let inner: Command<i32> = Command::batch([Command::set_title("a"), Command::set_title("b")]);
        let cmd = Command::batch([inner, Command::none(), Command::set_title("c")]);
        assert_eq!(titles(&cmd.inner), vec!["a", "b", "c"]);
        assert!(!cmd.is_quit());
    }
}
