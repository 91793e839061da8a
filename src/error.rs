use crate::core::config::ConfigError;
use crate::input::InputError;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
    Input(InputError),
    ProcessError(ProcessError),
    ConfigError(ConfigError),
    FlagError(String),
    /// The script given on the command line could not be opened.
    ScriptOpen {
        path: String,
        source: std::io::Error,
    },
}

impl ShellError {
    /// Status the shell exits with when it stops on this error.
    pub fn exit_status(&self) -> i32 {
        match self {
            ShellError::ScriptOpen { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                126
            }
            ShellError::ScriptOpen { .. } => 127,
            ShellError::FlagError(_) => 2,
            _ => 1,
        }
    }

    /// The line printed to stderr, prefixed with the program name.
    pub fn diagnostic(&self, program_name: &str) -> String {
        match self {
            ShellError::ScriptOpen { .. } => format!("{}: 0: {}", program_name, self),
            _ => format!("{}: {}", program_name, self),
        }
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<InputError> for ShellError {
    fn from(err: InputError) -> Self {
        ShellError::Input(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::ProcessError(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::ConfigError(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::Input(e) => write!(f, "{}", e),
            ShellError::ProcessError(e) => write!(f, "Process error: {}", e),
            ShellError::ConfigError(e) => write!(f, "Config error: {}", e),
            ShellError::FlagError(msg) => write!(f, "{}", msg),
            ShellError::ScriptOpen { path, .. } => write!(f, "Can't open {}", path),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Io(e) | ShellError::ScriptOpen { source: e, .. } => Some(e),
            _ => None,
        }
    }
}
