use std::io::Write;

use super::{Command, CommandError, Flow};
use crate::core::ShellContext;

fn print_environment(ctx: &ShellContext) -> Result<(), CommandError> {
    let mut out = std::io::stdout().lock();
    for entry in ctx.env.entries() {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}

/// `env`
#[derive(Clone, Copy, Default)]
pub struct EnvCommand;

impl Command for EnvCommand {
    fn execute(&self, ctx: &mut ShellContext, _args: &[String]) -> Result<Flow, CommandError> {
        print_environment(ctx)?;
        Ok(Flow::Continue(0))
    }
}

/// `setenv NAME VALUE`
#[derive(Clone, Copy, Default)]
pub struct SetEnvCommand;

impl Command for SetEnvCommand {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> Result<Flow, CommandError> {
        let [name, value] = args else {
            return Err(CommandError::InvalidArguments(
                "Incorrect number of arguments".to_string(),
            ));
        };

        ctx.env.set(name, value)?;
        Ok(Flow::Continue(0))
    }
}

/// `unsetenv NAME...` and `unset NAME...`; only the former insists on at
/// least one name.
#[derive(Clone, Copy)]
pub struct UnsetCommand {
    require_names: bool,
}

impl UnsetCommand {
    pub fn strict() -> Self {
        Self {
            require_names: true,
        }
    }

    pub fn lenient() -> Self {
        Self {
            require_names: false,
        }
    }
}

impl Command for UnsetCommand {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> Result<Flow, CommandError> {
        if args.is_empty() && self.require_names {
            return Err(CommandError::InvalidArguments(
                "Too few arguments".to_string(),
            ));
        }

        for name in args {
            ctx.env.unset(name);
        }
        Ok(Flow::Continue(0))
    }
}

/// `export [NAME=VALUE...]`
#[derive(Clone, Copy, Default)]
pub struct ExportCommand;

impl Command for ExportCommand {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> Result<Flow, CommandError> {
        if args.is_empty() {
            print_environment(ctx)?;
            return Ok(Flow::Continue(0));
        }

        let mut status = 0;
        for arg in args {
            // `export NAME` marks an existing variable; every variable
            // here is already exported, so only the name is checked.
            let result = match arg.split_once('=') {
                Some((name, value)) => ctx.env.set(name, value),
                None if crate::core::env::is_valid_name(arg) => Ok(()),
                None => Err(crate::core::env::EnvError::InvalidName(arg.clone())),
            };

            if let Err(err) = result {
                ctx.report("export", &err);
                status = 1;
            }
        }
        Ok(Flow::Continue(status))
    }
}
