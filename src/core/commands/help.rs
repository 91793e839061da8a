use std::io::Write;

use super::{Builtin, Command, CommandError, Flow, BUILTINS};
use crate::core::ShellContext;

#[derive(Clone, Copy, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _ctx: &mut ShellContext, args: &[String]) -> Result<Flow, CommandError> {
        let mut out = std::io::stdout().lock();

        if args.is_empty() {
            writeln!(out, "Builtin commands:")?;
            for &(_, builtin) in BUILTINS {
                writeln!(out, "  {:<26} {}", builtin.usage(), builtin.summary())?;
            }
            return Ok(Flow::Continue(0));
        }

        for name in args {
            let builtin = Builtin::lookup(name).ok_or_else(|| {
                CommandError::InvalidArguments(format!("no help topics match '{}'", name))
            })?;
            writeln!(out, "{}: {}", name, builtin.usage())?;
            writeln!(out, "    {}", builtin.summary())?;
        }
        Ok(Flow::Continue(0))
    }
}
