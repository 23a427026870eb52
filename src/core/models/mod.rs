//! Domain models for slotlint
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ItemDefinition`] - A catalog entry and its slots
//! - [`BaseCategory`], [`Context`], [`Bucket`] - Classification enums
//! - [`Report`] - Invalid IDs grouped by bucket
//! - [`SlotRules`] - Structural rules checked during traversal

mod category;
mod item;
mod report;
mod rules;

pub use category::{BaseCategory, Bucket, Context};
pub use item::{AmmoCount, ItemDefinition, Slot};
pub use report::{Buckets, IdSet, Report, Section};
pub use rules::{DEFAULT_MAGAZINE_SLOT, SlotRules};
