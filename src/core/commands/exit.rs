use super::{Command, CommandError, Flow};
use crate::core::ShellContext;

#[derive(Clone, Copy, Default)]
pub struct ExitCommand;

impl ExitCommand {
    /// An optional `+` followed by decimal digits that fit in an `i32`.
    pub fn parse_status(arg: &str) -> Option<i32> {
        let digits = arg.strip_prefix('+').unwrap_or(arg);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<i32>().ok()
    }
}

impl Command for ExitCommand {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> Result<Flow, CommandError> {
        match args.first() {
            None => Ok(Flow::Exit(ctx.last_status)),
            Some(arg) => {
                let status = Self::parse_status(arg)
                    .ok_or_else(|| CommandError::IllegalNumber(arg.clone()))?;
                Ok(Flow::Exit(status & 0xff))
            }
        }
    }
}
