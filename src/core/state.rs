use std::fmt::Display;

use crate::core::{alias::AliasStore, env::EnvStore};
use crate::input::History;
use crate::shell::expand::SpecialVars;

/// Everything one shell invocation carries from line to line.
pub struct ShellContext {
    pub program_name: String,
    /// The line being processed, comments stripped.
    pub line: String,
    /// Arguments of the segment being dispatched.
    pub argv: Vec<String>,
    /// Input lines read so far; diagnostics quote it.
    pub line_count: usize,
    pub error_count: usize,
    pub interactive: bool,
    pub env: EnvStore,
    pub history: History,
    pub aliases: AliasStore,
    pub last_status: i32,
    pub pid: u32,
    /// Set by `exit`; the loop stops once the current line is done.
    pub exit_request: Option<i32>,
}

impl ShellContext {
    pub fn new(program_name: impl Into<String>, interactive: bool, env: EnvStore, history: History) -> Self {
        Self {
            program_name: program_name.into(),
            line: String::new(),
            argv: Vec::new(),
            line_count: 0,
            error_count: 0,
            interactive,
            env,
            history,
            aliases: AliasStore::new(),
            last_status: 0,
            pid: std::process::id(),
            exit_request: None,
        }
    }

    /// Writes `<program>: <line>: <command>: <reason>` to stderr.
    pub fn report(&mut self, command: &str, reason: impl Display) {
        self.error_count += 1;
        eprintln!("{}", self.diagnostic(command, reason));
    }

    pub fn diagnostic(&self, command: &str, reason: impl Display) -> String {
        format!(
            "{}: {}: {}: {}",
            self.program_name, self.line_count, command, reason
        )
    }

    pub fn special_vars(&self) -> SpecialVars {
        SpecialVars {
            last_status: self.last_status,
            pid: self.pid,
        }
    }

    /// Status the process should exit with when the loop ends.
    pub fn exit_status(&self) -> i32 {
        self.exit_request.unwrap_or(self.last_status)
    }
}
