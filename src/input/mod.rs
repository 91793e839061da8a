mod completer;
mod editor;
pub mod history;
mod reader;

pub use completer::{CommandCompleter, ShellCompleter};
pub use editor::EditorInput;
pub use history::History;
pub use reader::{BufferedInput, InterruptibleReader};

use crate::core::ShellContext;

/// Result of one read at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// Ctrl-C at the prompt; the caller prompts again.
    Interrupted,
    Eof,
}

#[derive(Debug)]
pub enum InputError {
    Io(std::io::Error),
    Readline(rustyline::error::ReadlineError),
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err)
    }
}

impl From<rustyline::error::ReadlineError> for InputError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        InputError::Readline(err)
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "read error: {}", e),
            InputError::Readline(e) => write!(f, "readline error: {}", e),
        }
    }
}

impl std::error::Error for InputError {}

/// Where the shell loop gets its lines from.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Line, InputError>;

    /// Called once a line has been processed.
    fn record(&mut self, _line: &str) {}

    /// Called before each prompt so completion sees the current aliases
    /// and `PATH`.
    fn sync(&mut self, _ctx: &ShellContext) {}
}
