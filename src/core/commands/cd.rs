use std::env;
use std::io::Write;
use std::path::Path;

use super::{Command, CommandError, Flow};
use crate::core::ShellContext;

#[derive(Clone, Copy, Default)]
pub struct CdCommand;

impl CdCommand {
    fn target(ctx: &ShellContext, arg: Option<&str>) -> Result<String, CommandError> {
        match arg {
            None => ctx
                .env
                .get("HOME")
                .filter(|home| !home.is_empty())
                .map(str::to_string)
                .or_else(|| dirs::home_dir().map(|home| home.to_string_lossy().into_owned()))
                .ok_or_else(|| CommandError::InvalidArguments("HOME not set".to_string())),
            Some("-") => ctx
                .env
                .get("OLDPWD")
                .map(str::to_string)
                .ok_or_else(|| CommandError::InvalidArguments("OLDPWD not set".to_string())),
            Some(dir) => Ok(dir.to_string()),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> Result<Flow, CommandError> {
        let arg = args.first().map(String::as_str);
        let dir = Self::target(ctx, arg)?;

        let cant_cd = |reason: &str| CommandError::CantCd {
            dir: dir.clone(),
            reason: reason.to_string(),
        };
        match Path::new(&dir).metadata() {
            Err(_) => return Err(cant_cd("No such file or directory")),
            Ok(meta) if !meta.is_dir() => return Err(cant_cd("Not a directory")),
            Ok(_) => {}
        }

        let previous = match ctx.env.get("PWD") {
            Some(pwd) => pwd.to_string(),
            None => env::current_dir()?.to_string_lossy().into_owned(),
        };
        env::set_current_dir(&dir).map_err(|e| cant_cd(&e.to_string()))?;
        let current = env::current_dir()?.to_string_lossy().into_owned();

        ctx.env.set("OLDPWD", &previous)?;
        ctx.env.set("PWD", &current)?;
        tracing::debug!(from = %previous, to = %current, "changed directory");

        if arg == Some("-") {
            writeln!(std::io::stdout().lock(), "{}", current)?;
        }
        Ok(Flow::Continue(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::{args, context};

    #[test]
    fn test_cd_invalid_leaves_cwd() -> Result<(), Box<dyn std::error::Error>> {
        let mut ctx = context();
        let before = env::current_dir()?;

        let result = CdCommand.execute(&mut ctx, &args(&["/nonexistent/path"]));
        match result {
            Err(err @ CommandError::CantCd { .. }) => {
                assert_eq!(err.status(), 2);
                assert!(err.to_string().contains("No such file or directory"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(env::current_dir()?, before);
        assert_eq!(ctx.env.get("OLDPWD"), None);
        Ok(())
    }

    #[test]
    fn test_cd_into_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("plain");
        std::fs::write(&file, "")?;

        let mut ctx = context();
        let result = CdCommand.execute(&mut ctx, &args(&[&file.display().to_string()]));
        assert!(matches!(
            result,
            Err(CommandError::CantCd { ref reason, .. }) if reason == "Not a directory"
        ));
        Ok(())
    }

    #[test]
    fn test_cd_dash_without_oldpwd() {
        let mut ctx = context();
        let result = CdCommand.execute(&mut ctx, &args(&["-"]));
        assert!(matches!(result, Err(CommandError::InvalidArguments(_))));
    }
}
