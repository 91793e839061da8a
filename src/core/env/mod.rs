mod paths;
mod vars;

pub use paths::ShellPaths;
pub use vars::EnvStore;

#[derive(Debug)]
pub enum EnvError {
    HomeDirNotFound,
    InvalidName(String),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::HomeDirNotFound => write!(f, "HOME not set"),
            EnvError::InvalidName(name) => write!(f, "bad variable name: {}", name),
        }
    }
}

impl std::error::Error for EnvError {}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
