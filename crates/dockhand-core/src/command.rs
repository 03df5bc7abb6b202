use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// The closed set of commands dockhand dispatches. Dispatch is an
/// exhaustive `match`, so a variant without a handler does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Start,
    Stop,
    Build,
}

impl CommandKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Build => "build",
        }
    }
}

impl Display for CommandKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized command-line input for one run. Built once from the
/// parsed arguments and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub command: CommandKind,
    pub targets: Vec<String>,
    pub build: bool,
    pub apply_all: bool,
    pub cwd: PathBuf,
}
