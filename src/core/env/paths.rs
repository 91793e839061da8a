use super::{EnvError, EnvStore};
use std::path::PathBuf;

pub const HISTORY_FILE: &str = ".simple_shell_history";
pub const RC_FILE: &str = ".hshrc";

#[derive(Debug, Clone)]
pub struct ShellPaths {
    home: PathBuf,
}

impl ShellPaths {
    /// Resolves the home directory from the shell's own `HOME` entry,
    /// falling back to the platform lookup.
    pub fn new(env: &EnvStore) -> Result<Self, EnvError> {
        let home = env
            .get("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .ok_or(EnvError::HomeDirNotFound)?;

        Ok(Self { home })
    }

    pub fn history_file(&self) -> PathBuf {
        self.home.join(HISTORY_FILE)
    }

    pub fn rc_file(&self) -> PathBuf {
        self.home.join(RC_FILE)
    }
}
