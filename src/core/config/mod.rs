use std::fmt;
use std::path::{Path, PathBuf};

mod loader;

pub use loader::ConfigLoader;

/// Startup file run through the pipeline before the first prompt.
#[derive(Debug, Clone)]
pub struct Config {
    rc_path: PathBuf,
    /// Set when the path came from `--config`; a missing file is then an error.
    explicit: bool,
}

impl Config {
    pub fn new(rc_path: PathBuf) -> Self {
        Self {
            rc_path,
            explicit: false,
        }
    }

    pub fn explicit(rc_path: PathBuf) -> Self {
        Self {
            rc_path,
            explicit: true,
        }
    }

    pub fn rc_path(&self) -> &Path {
        &self.rc_path
    }

    /// Command lines of the startup file, in order.
    pub fn load(&self) -> Result<Vec<String>, ConfigError> {
        if !self.rc_path.exists() {
            if self.explicit {
                return Err(ConfigError::ConfigFileNotFound(
                    self.rc_path.display().to_string(),
                ));
            }
            return Ok(Vec::new());
        }
        ConfigLoader::new(&self.rc_path).load_lines()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigFileNotFound(String),
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConfigFileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
