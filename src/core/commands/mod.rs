mod alias;
mod builtin;
mod cd;
mod env;
mod exit;
mod help;
mod history;

pub use alias::AliasCommand;
pub use builtin::{Builtin, BUILTINS};
pub use cd::CdCommand;
pub use env::{EnvCommand, ExportCommand, SetEnvCommand, UnsetCommand};
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use history::HistoryCommand;

use crate::core::env::EnvError;
use crate::core::ShellContext;

/// What the shell loop does after a builtin returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue(i32),
    Exit(i32),
}

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    IllegalNumber(String),
    CantCd { dir: String, reason: String },
    IoError(std::io::Error),
    EnvError(EnvError),
}

impl CommandError {
    /// Value `$?` takes when the builtin fails this way.
    pub fn status(&self) -> i32 {
        match self {
            CommandError::IllegalNumber(_) | CommandError::CantCd { .. } => 2,
            CommandError::InvalidArguments(_)
            | CommandError::IoError(_)
            | CommandError::EnvError(_) => 1,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::IllegalNumber(arg) => write!(f, "Illegal number: {}", arg),
            CommandError::CantCd { dir, reason } => write!(f, "can't cd to {}: {}", dir, reason),
            CommandError::IoError(err) => write!(f, "{}", err),
            CommandError::EnvError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::EnvError(err)
    }
}

pub trait Command {
    /// `args` excludes the command name.
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> Result<Flow, CommandError>;
}
