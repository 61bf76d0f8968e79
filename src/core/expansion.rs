//! Expansion state for collapsible navigation groups.

use std::collections::HashSet;

/// Set of group keys whose children are currently shown.
///
/// Groups toggle independently: opening one never closes another.
/// Keys are not checked against the catalog; a key with no matching
/// group is recorded and never rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: HashSet<String>,
}

impl ExpansionState {
    /// All groups collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the group between open and collapsed.
    ///
    /// Returns `true` if the group is open afterwards.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.open.remove(key) {
            false
        } else {
            self.open.insert(key.to_string());
            true
        }
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open.contains(key)
    }

    /// Number of open groups.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Open keys, in no particular order.
    pub fn open_keys(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }
}
