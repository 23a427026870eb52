//! Report model
//!
//! Collects invalid item IDs into the five report buckets and exposes them as
//! ordered sections for rendering.

use std::collections::HashSet;

use super::Bucket;

/// Insertion-ordered set of item IDs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl IdSet {
    /// Insert an ID; returns false if it was already present
    pub fn insert(&mut self, id: &str) -> bool {
        if self.members.contains(id) {
            return false;
        }
        self.members.insert(id.to_string());
        self.order.push(id.to_string());
        true
    }

    /// Whether the ID is present
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// IDs in insertion order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    /// Number of IDs
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// The five report buckets of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    sets: [IdSet; 5],
}

impl Buckets {
    /// File an ID into a bucket; returns false if that bucket already had it
    pub fn insert(&mut self, bucket: Bucket, id: &str) -> bool {
        self.sets[bucket.index()].insert(id)
    }

    /// IDs filed in a bucket, in discovery order
    #[must_use]
    pub fn get(&self, bucket: Bucket) -> &[String] {
        self.sets[bucket.index()].as_slice()
    }

    /// The bucket holding this ID, if any
    #[must_use]
    pub fn bucket_of(&self, id: &str) -> Option<Bucket> {
        Bucket::ALL.into_iter().find(|b| self.sets[b.index()].contains(id))
    }

    /// Total number of filed IDs
    #[must_use]
    pub fn total(&self) -> usize {
        self.sets.iter().map(IdSet::len).sum()
    }

    /// Whether every bucket is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(IdSet::is_empty)
    }
}

/// One rendered bucket: its count and IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// Which bucket
    pub bucket: Bucket,
    /// IDs in discovery order
    pub ids: &'a [String],
}

impl Section<'_> {
    /// Number of IDs in the section
    #[must_use]
    pub const fn count(&self) -> usize {
        self.ids.len()
    }

    /// Summary line, e.g. `2 invalid weapon IDs: ["a","b"]`
    #[must_use]
    pub fn line(&self) -> String {
        let ids = serde_json::to_string(self.ids).unwrap_or_default();
        format!("{} {}: {ids}", self.count(), self.bucket.label())
    }
}

/// Result of a full checker run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Filed invalid IDs
    pub buckets: Buckets,
    /// Distinct IDs evaluated during the run
    pub checked: usize,
}

impl Report {
    /// Non-empty buckets in report order
    #[must_use]
    pub fn sections(&self) -> Vec<Section<'_>> {
        Bucket::ALL
            .into_iter()
            .map(|bucket| Section {
                bucket,
                ids: self.buckets.get(bucket),
            })
            .filter(|s| !s.ids.is_empty())
            .collect()
    }

    /// Whether no invalid IDs were found
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.buckets.is_empty()
    }
}
