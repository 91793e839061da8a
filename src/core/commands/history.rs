use std::io::Write;

use super::{Command, CommandError, Flow};
use crate::core::ShellContext;

#[derive(Clone, Copy, Default)]
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> Result<Flow, CommandError> {
        match args.first().map(String::as_str) {
            None => {
                let mut out = std::io::stdout().lock();
                for (number, line) in ctx.history.numbered() {
                    writeln!(out, "{:>5}  {}", number, line)?;
                }
                Ok(Flow::Continue(0))
            }
            Some("-c") => {
                ctx.history.clear();
                Ok(Flow::Continue(0))
            }
            Some(other) => Err(CommandError::InvalidArguments(format!(
                "{}: invalid option (usage: history [-c])",
                other
            ))),
        }
    }
}
