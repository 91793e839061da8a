use super::{
    AliasCommand, CdCommand, Command, CommandError, EnvCommand, ExitCommand, ExportCommand, Flow,
    HelpCommand, HistoryCommand, SetEnvCommand, UnsetCommand,
};
use crate::core::ShellContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Cd,
    Help,
    Env,
    SetEnv,
    UnsetEnv,
    Export,
    Unset,
    History,
    Alias,
}

/// Looked up in order, first exact match wins.
pub const BUILTINS: &[(&str, Builtin)] = &[
    ("exit", Builtin::Exit),
    ("env", Builtin::Env),
    ("help", Builtin::Help),
    ("history", Builtin::History),
    ("setenv", Builtin::SetEnv),
    ("unsetenv", Builtin::UnsetEnv),
    ("export", Builtin::Export),
    ("unset", Builtin::Unset),
    ("cd", Builtin::Cd),
    ("alias", Builtin::Alias),
];

impl Builtin {
    pub fn lookup(name: &str) -> Option<Self> {
        BUILTINS
            .iter()
            .find(|(builtin_name, _)| *builtin_name == name)
            .map(|&(_, builtin)| builtin)
    }

    pub fn name(self) -> &'static str {
        BUILTINS
            .iter()
            .find(|(_, builtin)| *builtin == self)
            .map(|&(name, _)| name)
            .unwrap_or_default()
    }

    pub fn usage(self) -> &'static str {
        match self {
            Builtin::Exit => "exit [n]",
            Builtin::Cd => "cd [dir | -]",
            Builtin::Help => "help [builtin]",
            Builtin::Env => "env",
            Builtin::SetEnv => "setenv NAME VALUE",
            Builtin::UnsetEnv => "unsetenv NAME...",
            Builtin::Export => "export [NAME=VALUE...]",
            Builtin::Unset => "unset NAME...",
            Builtin::History => "history [-c]",
            Builtin::Alias => "alias [name[=value]...]",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Builtin::Exit => "Exit the shell with status n, or the last status.",
            Builtin::Cd => "Change the working directory (default $HOME, - for $OLDPWD).",
            Builtin::Help => "Describe builtin commands.",
            Builtin::Env => "Print the environment.",
            Builtin::SetEnv => "Set an environment variable.",
            Builtin::UnsetEnv => "Remove environment variables.",
            Builtin::Export => "Set environment variables, or print them.",
            Builtin::Unset => "Remove environment variables.",
            Builtin::History => "List the command history, or clear it with -c.",
            Builtin::Alias => "Define or print aliases.",
        }
    }
}

impl Command for Builtin {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> Result<Flow, CommandError> {
        match self {
            Builtin::Exit => ExitCommand.execute(ctx, args),
            Builtin::Cd => CdCommand.execute(ctx, args),
            Builtin::Help => HelpCommand.execute(ctx, args),
            Builtin::Env => EnvCommand.execute(ctx, args),
            Builtin::SetEnv => SetEnvCommand.execute(ctx, args),
            Builtin::UnsetEnv => UnsetCommand::strict().execute(ctx, args),
            Builtin::Export => ExportCommand.execute(ctx, args),
            Builtin::Unset => UnsetCommand::lenient().execute(ctx, args),
            Builtin::History => HistoryCommand.execute(ctx, args),
            Builtin::Alias => AliasCommand.execute(ctx, args),
        }
    }
}
