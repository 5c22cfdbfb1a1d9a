//! Pull-request author allowlist.

use std::collections::HashSet;

/// Set of authors allowed to trigger a preview deployment.
///
/// Entries are stored lowercased, so lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allowlist {
    authors: HashSet<String>,
}

impl Allowlist {
    /// Parse a raw list separated by any run of commas and whitespace.
    pub fn parse(raw: &str) -> Self {
        let authors = raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { authors }
    }

    /// Whether `author` is on the list, ignoring case.
    pub fn permits(&self, author: &str) -> bool {
        self.authors.contains(&author.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }
}
