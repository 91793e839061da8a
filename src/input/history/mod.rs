mod file_ops;

use std::path::{Path, PathBuf};

use self::file_ops::FileOps;
use crate::core::list::{ListNode, ListStore};

pub const HISTORY_MAX: usize = 4096;

#[derive(Debug)]
pub enum HistoryError {
    Io(std::io::Error),
    NoFile,
}

impl From<std::io::Error> for HistoryError {
    fn from(err: std::io::Error) -> Self {
        HistoryError::Io(err)
    }
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "history file: {}", e),
            HistoryError::NoFile => write!(f, "no history file configured"),
        }
    }
}

impl std::error::Error for HistoryError {}

/// Input lines in the order they were entered, oldest first. Entry numbers
/// are positions counted from 1, so dropping the oldest entry renumbers
/// the rest.
pub struct History {
    entries: ListStore,
    file_ops: Option<FileOps>,
    max_entries: usize,
}

impl History {
    /// Loads `history_file` if it exists, keeping only the newest
    /// `max_entries` lines.
    pub fn new(history_file: PathBuf, max_entries: usize) -> Result<Self, HistoryError> {
        let file_ops = FileOps::new(history_file);
        let loaded = file_ops.load_entries()?;
        tracing::debug!(
            path = %file_ops.path().display(),
            lines = loaded.len(),
            "loaded history"
        );

        let mut history = Self {
            entries: ListStore::new(),
            file_ops: Some(file_ops),
            max_entries,
        };
        for line in loaded {
            history.entries.push_back(line);
        }
        history.trim_entries();
        Ok(history)
    }

    /// A history that is never persisted.
    pub fn in_memory(max_entries: usize) -> Self {
        Self {
            entries: ListStore::new(),
            file_ops: None,
            max_entries,
        }
    }

    pub fn add(&mut self, entry: &str) {
        if entry.trim().is_empty() {
            return;
        }

        self.entries.push_back(entry);
        self.trim_entries();
    }

    /// `(number, line)` pairs numbered from 1.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .map(|ListNode { index, text }| (index + 1, text))
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|node| node.text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn path(&self) -> Option<&Path> {
        self.file_ops.as_ref().map(FileOps::path)
    }

    pub fn save(&self) -> Result<(), HistoryError> {
        let file_ops = self.file_ops.as_ref().ok_or(HistoryError::NoFile)?;
        file_ops.write_entries(self.lines())?;
        tracing::debug!(
            path = %file_ops.path().display(),
            lines = self.len(),
            "saved history"
        );
        Ok(())
    }

    fn trim_entries(&mut self) {
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }
}
