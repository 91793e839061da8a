use std::{fs, path::Path};

use super::ConfigError;

pub struct ConfigLoader<'a> {
    path: &'a Path,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Non-blank, non-comment lines, trimmed.
    pub fn load_lines(&self) -> Result<Vec<String>, ConfigError> {
        let content = fs::read_to_string(self.path)?;
        let lines: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();

        tracing::debug!(path = %self.path.display(), lines = lines.len(), "loaded startup file");
        Ok(lines)
    }
}
