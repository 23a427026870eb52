//! Root scanner - drives a full checker run
//!
//! Passes run in a fixed order, and that order decides which bucket a shared
//! dangling ID lands in:
//!
//! 1. weapon roots (existence only)
//! 2. weapon attachments (walk every weapon's slots)
//! 3. equipment roots (existence only)
//! 4. equipment attachments (walk every equipment item's slots)
//! 5. remainder (every item not yet evaluated, walked as uncategorized)

use log::{debug, info};

use super::classifier::classify;
use super::ledger::Ledger;
use super::walker::Walker;
use crate::core::models::{BaseCategory, Buckets, Context, ItemDefinition, Report, SlotRules};
use crate::core::ports::Catalog;

/// Runs all category passes over a catalog
#[derive(Debug)]
pub struct Scanner<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    rules: &'a SlotRules,
}

/// Mutable state of one run
#[derive(Debug, Default)]
struct RunState {
    ledger: Ledger,
    buckets: Buckets,
}

impl<'a, C: Catalog + ?Sized> Scanner<'a, C> {
    /// Create a scanner for a catalog
    pub const fn new(catalog: &'a C, rules: &'a SlotRules) -> Self {
        Self { catalog, rules }
    }

    /// Run every pass and return the report
    #[must_use]
    pub fn run(&self) -> Report {
        let mut state = RunState::default();

        let weapons = self.catalog.items_of(BaseCategory::Weapon);
        self.check_roots(&mut state, &weapons, Context::Weapon);
        self.walk_roots(&mut state, &weapons, Context::WeaponAttachment);

        let equipment = self.catalog.items_of(BaseCategory::Equipment);
        self.check_roots(&mut state, &equipment, Context::Equipment);
        self.walk_roots(&mut state, &equipment, Context::EquipmentAttachment);

        self.sweep_remainder(&mut state);

        info!(
            "Item checking complete: {} checked, {} invalid",
            state.ledger.len(),
            state.buckets.total()
        );

        Report {
            checked: state.ledger.len(),
            buckets: state.buckets,
        }
    }

    /// Existence check of root items themselves, without descending
    fn check_roots(&self, state: &mut RunState, roots: &[&ItemDefinition], context: Context) {
        debug!("{context} pass: {} root(s)", roots.len());
        for root in roots {
            if state.ledger.try_visit(&root.id) {
                self.record_if_missing(state, &root.id, context);
            }
        }
    }

    /// Walk the slots of every root, visited or not
    fn walk_roots(&self, state: &mut RunState, roots: &[&ItemDefinition], context: Context) {
        debug!("{context} pass: {} root(s)", roots.len());
        let mut walker = Walker::new(self.catalog, self.rules, &mut state.ledger, &mut state.buckets);
        for &root in roots {
            walker.walk(root, context);
        }
    }

    /// Evaluate and walk every item no earlier pass reached
    fn sweep_remainder(&self, state: &mut RunState) {
        let pending: Vec<&ItemDefinition> =
            self.catalog.items().filter(|item| !state.ledger.contains(&item.id)).collect();
        debug!("{} pass: {} candidate(s)", Context::Remainder, pending.len());

        for item in pending {
            // Walking an earlier candidate may already have reached this one
            if !state.ledger.try_visit(&item.id) {
                continue;
            }
            if self.record_if_missing(state, &item.id, Context::Remainder) {
                continue;
            }
            Walker::new(self.catalog, self.rules, &mut state.ledger, &mut state.buckets)
                .walk(item, Context::Remainder);
        }
    }

    /// File `id` if the catalog lacks it; returns true when it was missing
    fn record_if_missing(&self, state: &mut RunState, id: &str, context: Context) -> bool {
        if self.catalog.exists(id) {
            return false;
        }
        let bucket = classify(id, context);
        state.buckets.insert(bucket, id);
        debug!("Missing item {id} ({bucket})");
        true
    }
}

/// Check a catalog with the given rules
#[must_use]
pub fn check_catalog<C: Catalog + ?Sized>(catalog: &C, rules: &SlotRules) -> Report {
    Scanner::new(catalog, rules).run()
}
