//! Declared export names

use std::collections::HashSet;

/// Names a module declares as its public interface
///
/// A module without a declaration has an empty set; nothing passes the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSet {
    names: HashSet<String>,
}

impl ExportSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in sorted order (the set itself is unordered)
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S: Into<String>> FromIterator<S> for ExportSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
