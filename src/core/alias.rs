use crate::core::list::ListStore;

#[derive(Debug)]
pub enum AliasError {
    EmptyName,
}

impl std::fmt::Display for AliasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AliasError::EmptyName => write!(f, "alias name cannot be empty"),
        }
    }
}

impl std::error::Error for AliasError {}

/// Alias table stored as `name=value` entries, first match wins.
#[derive(Debug, Clone, Default)]
pub struct AliasStore {
    entries: ListStore,
}

impl AliasStore {
    pub fn new() -> Self {
        Self {
            entries: ListStore::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .find_prefixed(name, '=')
            .and_then(|node| node.text.split_once('='))
            .map(|(_, value)| value)
    }

    /// Defines `name`, replacing any previous definition. An empty value
    /// removes the alias instead.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), AliasError> {
        if name.is_empty() {
            return Err(AliasError::EmptyName);
        }

        self.remove(name);
        if !value.is_empty() {
            self.entries.push_back(format!("{}={}", name, value));
        }
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        match self.entries.find_prefixed(name, '=').map(|node| node.index) {
            Some(index) => self.entries.remove_at(index).is_some(),
            None => false,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(name, _)| name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|node| node.text.split_once('='))
    }

    /// `name='value'`, the form `alias` prints and accepts back.
    pub fn format_entry(name: &str, value: &str) -> String {
        format!("{}='{}'", name, value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
