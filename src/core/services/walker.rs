//! Graph walker
//!
//! Follows slot filters from a root item down through every reachable child.
//! The walk uses an explicit stack of slot cursors so catalog depth never
//! touches the call stack; visiting order is the same depth-first,
//! declaration-order sequence plain recursion would produce.

use log::{debug, warn};

use super::classifier::classify;
use super::ledger::Ledger;
use crate::core::models::{Bucket, Buckets, Context, ItemDefinition, Slot, SlotRules};
use crate::core::ports::Catalog;

/// Position inside one item's slots and filters
#[derive(Debug)]
struct Cursor<'a> {
    item: &'a ItemDefinition,
    slot: usize,
    entry: usize,
}

impl<'a> Cursor<'a> {
    const fn new(item: &'a ItemDefinition) -> Self {
        Self {
            item,
            slot: 0,
            entry: 0,
        }
    }

    /// Next `(slot, child id)` edge in declaration order
    fn next_edge(&mut self) -> Option<(&'a Slot, &'a str)> {
        while let Some(slot) = self.item.slots.get(self.slot) {
            if let Some(id) = slot.filter.get(self.entry) {
                self.entry += 1;
                return Some((slot, id.as_str()));
            }
            self.slot += 1;
            self.entry = 0;
        }
        None
    }
}

/// Walks slot filters, filing invalid IDs into buckets
///
/// The ledger and buckets are borrowed from the caller so several walks share
/// one run's state.
#[derive(Debug)]
pub struct Walker<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    rules: &'a SlotRules,
    ledger: &'a mut Ledger,
    buckets: &'a mut Buckets,
}

impl<'a, C: Catalog + ?Sized> Walker<'a, C> {
    /// Create a walker over a catalog with shared run state
    pub const fn new(
        catalog: &'a C,
        rules: &'a SlotRules,
        ledger: &'a mut Ledger,
        buckets: &'a mut Buckets,
    ) -> Self {
        Self {
            catalog,
            rules,
            ledger,
            buckets,
        }
    }

    /// Walk every slot filter reachable from `root` under `context`
    ///
    /// `root` itself is not checked against the ledger; only the IDs its
    /// slots (and their children's slots) reference are.
    pub fn walk(&mut self, root: &'a ItemDefinition, context: Context) {
        let mut stack = vec![Cursor::new(root)];

        while let Some(cursor) = stack.last_mut() {
            let Some((slot, id)) = cursor.next_edge() else {
                stack.pop();
                continue;
            };
            if let Some(child) = self.evaluate(slot, id, context) {
                stack.push(Cursor::new(child));
            }
        }
    }

    /// Evaluate one filter entry; returns the child to descend into, if any
    fn evaluate(&mut self, slot: &Slot, id: &str, context: Context) -> Option<&'a ItemDefinition> {
        if !self.ledger.try_visit(id) {
            return None;
        }

        let catalog = self.catalog;
        let Some(child) = catalog.get(id) else {
            let bucket = classify(id, context);
            if self.buckets.insert(bucket, id) {
                debug!("Missing item {id} in slot {} ({bucket})", slot.name);
            }
            return None;
        };

        if self.rules.is_magazine(&slot.name) && child.max_ammo_count.is_none() {
            // Always filed as a weapon attachment, whatever the context
            self.buckets.insert(Bucket::InvalidWeaponAttachment, id);
            warn!("Invalid magazine, missing max ammo count. Skipping. MagazineID: {id}");
            return None;
        }

        Some(child)
    }
}
