use super::{is_valid_name, EnvError};
use crate::core::list::ListStore;
use std::env;

/// Environment entries kept as `KEY=VALUE` strings, plus the flat view
/// handed to child processes. The view is rebuilt lazily whenever the
/// list has changed since it was last built.
#[derive(Clone, Debug, Default)]
pub struct EnvStore {
    entries: ListStore,
    view: Vec<String>,
    changed: bool,
}

impl EnvStore {
    /// Mirrors the process environment. Names or values that are not
    /// valid UTF-8 are kept with the bad bytes replaced.
    pub fn new() -> Self {
        Self::from_vars(env::vars_os().map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        }))
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut entries = ListStore::new();
        for (key, value) in vars {
            entries.push_back(format!("{}={}", key.as_ref(), value.as_ref()));
        }

        Self {
            entries,
            view: Vec::new(),
            changed: true,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .find_prefixed(name, '=')
            .and_then(|node| node.text.split_once('='))
            .map(|(_, value)| value)
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if !is_valid_name(name) {
            return Err(EnvError::InvalidName(name.to_string()));
        }

        let entry = format!("{}={}", name, value);
        let existing = self.entries.find_prefixed(name, '=').map(|node| node.index);
        match existing {
            Some(index) => {
                self.entries.replace_at(index, entry);
            }
            None => self.entries.push_back(entry),
        }
        self.changed = true;
        Ok(())
    }

    /// Removes every entry for `name`. Returns whether anything was removed.
    pub fn unset(&mut self, name: &str) -> bool {
        let mut removed = false;
        while let Some(index) = self.entries.find_prefixed(name, '=').map(|node| node.index) {
            self.entries.remove_at(index);
            removed = true;
        }
        if removed {
            self.changed = true;
        }
        removed
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|node| node.text)
    }

    /// The `KEY=VALUE` array for the next process launch.
    pub fn environ(&mut self) -> &[String] {
        if self.changed {
            self.view = self.entries.to_strings();
            self.changed = false;
            tracing::trace!(entries = self.view.len(), "rebuilt environment view");
        }
        &self.view
    }

    pub fn pairs(&mut self) -> impl Iterator<Item = (&str, &str)> {
        self.environ()
            .iter()
            .filter_map(|entry| entry.split_once('='))
    }
}
