use std::collections::VecDeque;

/// A node as seen during traversal. The index is its position at the time
/// of the walk, not a stable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListNode<'a> {
    pub index: usize,
    pub text: &'a str,
}

/// Ordered store of owned strings shared by the environment, alias table
/// and history.
#[derive(Debug, Clone, Default)]
pub struct ListStore {
    nodes: VecDeque<String>,
}

impl ListStore {
    pub fn new() -> Self {
        Self {
            nodes: VecDeque::new(),
        }
    }

    pub fn push_front(&mut self, text: impl Into<String>) {
        self.nodes.push_front(text.into());
    }

    pub fn push_back(&mut self, text: impl Into<String>) {
        self.nodes.push_back(text.into());
    }

    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        self.nodes.remove(index)
    }

    pub fn pop_front(&mut self) -> Option<String> {
        self.nodes.pop_front()
    }

    pub fn replace_at(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.nodes.get_mut(index) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ListNode<'_>> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, text)| ListNode { index, text })
    }

    /// First node whose text is `prefix` immediately followed by `delim`,
    /// e.g. `PATH` + `=` matches `PATH=/bin` but not `PATHEXT=.exe`.
    pub fn find_prefixed(&self, prefix: &str, delim: char) -> Option<ListNode<'_>> {
        self.iter().find(|node| {
            node.text
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with(delim))
        })
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.nodes.iter().cloned().collect()
    }
}
