//! Visitation ledger
//!
//! Run-scoped record of every item ID already evaluated. It is the only
//! cycle guard in the traversal and the only dedup mechanism.

use std::collections::HashSet;

/// Set of item IDs already evaluated in the current run
#[derive(Debug, Default)]
pub struct Ledger {
    seen: HashSet<String>,
}

impl Ledger {
    /// Create an empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an ID visited; returns true only the first time
    pub fn try_visit(&mut self, id: &str) -> bool {
        if self.seen.contains(id) {
            return false;
        }
        self.seen.insert(id.to_string())
    }

    /// Whether the ID has been visited
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Number of visited IDs
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether nothing has been visited yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
