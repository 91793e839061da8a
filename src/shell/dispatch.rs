use std::path::PathBuf;

use crate::core::commands::Builtin;
use crate::core::ShellContext;
use crate::path::{resolve_command, Denial, Resolution};

/// What argument 0 of a segment refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Builtin(Builtin),
    External(PathBuf),
    Denied(PathBuf, Denial),
    NotFound,
}

impl Dispatch {
    /// Resolves argument 0 of the current segment: builtins first, then a
    /// path containing `/`, then a `PATH` search using the shell's own
    /// environment.
    pub fn resolve(ctx: &ShellContext) -> Self {
        let Some(name) = ctx.argv.first() else {
            return Dispatch::NotFound;
        };
        if let Some(builtin) = Builtin::lookup(name) {
            return Dispatch::Builtin(builtin);
        }

        let dispatch = match resolve_command(name, ctx.env.get("PATH")) {
            Resolution::Found(path) => Dispatch::External(path),
            Resolution::Denied(path, denial) => Dispatch::Denied(path, denial),
            Resolution::NotFound => Dispatch::NotFound,
        };
        tracing::debug!(command = %name, ?dispatch, "resolved");
        dispatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::{args, context};

    fn resolve(ctx: &mut ShellContext, name: &str) -> Dispatch {
        ctx.argv = args(&[name]);
        Dispatch::resolve(ctx)
    }

    #[test]
    fn test_builtins_take_precedence() {
        let mut ctx = context();
        assert_eq!(resolve(&mut ctx, "cd"), Dispatch::Builtin(Builtin::Cd));
        assert_eq!(resolve(&mut ctx, "env"), Dispatch::Builtin(Builtin::Env));
    }

    #[test]
    fn test_external_uses_shell_path() -> Result<(), Box<dyn std::error::Error>> {
        let mut ctx = context();
        assert!(matches!(resolve(&mut ctx, "sh"), Dispatch::External(_)));

        ctx.env.set("PATH", "/nonexistent")?;
        assert_eq!(resolve(&mut ctx, "sh"), Dispatch::NotFound);
        assert!(matches!(resolve(&mut ctx, "/bin/sh"), Dispatch::External(_)));
        Ok(())
    }

    #[test]
    fn test_directory_is_denied() {
        let mut ctx = context();
        assert_eq!(
            resolve(&mut ctx, "/"),
            Dispatch::Denied(PathBuf::from("/"), Denial::IsDirectory)
        );
    }

    #[test]
    fn test_empty_argv_is_not_found() {
        let ctx = context();
        assert_eq!(Dispatch::resolve(&ctx), Dispatch::NotFound);
    }
}
