use std::io::Write;

use super::{Command, CommandError, Flow};
use crate::core::alias::AliasStore;
use crate::core::ShellContext;

#[derive(Clone, Copy, Default)]
pub struct AliasCommand;

impl AliasCommand {
    /// Drops one pair of matching surrounding quotes.
    fn unquote(value: &str) -> &str {
        let bytes = value.as_bytes();
        if bytes.len() >= 2
            && (bytes[0] == b'\'' || bytes[0] == b'"')
            && bytes[bytes.len() - 1] == bytes[0]
        {
            &value[1..value.len() - 1]
        } else {
            value
        }
    }
}

impl Command for AliasCommand {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> Result<Flow, CommandError> {
        if args.is_empty() {
            let mut out = std::io::stdout().lock();
            for (name, value) in ctx.aliases.iter() {
                writeln!(out, "{}", AliasStore::format_entry(name, value))?;
            }
            return Ok(Flow::Continue(0));
        }

        let mut status = 0;
        for arg in args {
            match arg.split_once('=') {
                Some((name, value)) => {
                    if let Err(err) = ctx.aliases.set(name, Self::unquote(value)) {
                        ctx.report("alias", err);
                        status = 1;
                    }
                }
                None => match ctx.aliases.get(arg) {
                    Some(value) => {
                        let line = AliasStore::format_entry(arg, value);
                        writeln!(std::io::stdout().lock(), "{}", line)?;
                    }
                    None => {
                        ctx.report("alias", format!("{} not found", arg));
                        status = 1;
                    }
                },
            }
        }
        Ok(Flow::Continue(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::{args, context};

    #[test]
    fn test_alias_add() -> Result<(), CommandError> {
        let mut ctx = context();
        AliasCommand.execute(&mut ctx, &args(&["ll=ls -l"]))?;
        assert_eq!(ctx.aliases.get("ll"), Some("ls -l"));
        Ok(())
    }

    #[test]
    fn test_alias_strips_quotes() -> Result<(), CommandError> {
        let mut ctx = context();
        AliasCommand.execute(&mut ctx, &args(&["la='ls -a'", "g=\"git\""]))?;
        assert_eq!(ctx.aliases.get("la"), Some("ls -a"));
        assert_eq!(ctx.aliases.get("g"), Some("git"));
        Ok(())
    }

    #[test]
    fn test_alias_list_and_lookup() -> Result<(), CommandError> {
        let mut ctx = context();
        assert_eq!(AliasCommand.execute(&mut ctx, &[])?, Flow::Continue(0));
        AliasCommand.execute(&mut ctx, &args(&["ll=ls -l"]))?;
        assert_eq!(AliasCommand.execute(&mut ctx, &args(&["ll"]))?, Flow::Continue(0));
        Ok(())
    }

    #[test]
    fn test_alias_failures_are_independent() -> Result<(), CommandError> {
        let mut ctx = context();
        let flow = AliasCommand.execute(&mut ctx, &args(&["missing", "=oops", "ok=true"]))?;
        assert_eq!(flow, Flow::Continue(1));
        assert_eq!(ctx.aliases.get("ok"), Some("true"));
        assert_eq!(ctx.error_count, 2);
        Ok(())
    }

    #[test]
    fn test_alias_empty_value_removes() -> Result<(), CommandError> {
        let mut ctx = context();
        AliasCommand.execute(&mut ctx, &args(&["ll=ls -l"]))?;
        AliasCommand.execute(&mut ctx, &args(&["ll="]))?;
        assert_eq!(ctx.aliases.get("ll"), None);
        Ok(())
    }
}
