//! slotlint - A referential-integrity checker for hierarchical item catalogs
//!
//! Items declare slots whose filters list the item IDs allowed in them. This
//! library walks those filters from every weapon and equipment root, then
//! sweeps the rest of the catalog, and reports every referenced ID the
//! catalog does not define, grouped by the pass that first found it.
//!
//! ```
//! use slotlint::adapters::MemoryCatalog;
//! use slotlint::core::models::{BaseCategory, Bucket, ItemDefinition, SlotRules};
//! use slotlint::core::services::check_catalog;
//!
//! let catalog = MemoryCatalog::from_items([
//!     ItemDefinition::new("rifle")
//!         .with_category(BaseCategory::Weapon)
//!         .with_slot("mod_scope", ["scope_that_was_removed"]),
//! ])
//! .unwrap();
//!
//! let report = check_catalog(&catalog, &SlotRules::default());
//! assert_eq!(
//!     report.buckets.get(Bucket::InvalidWeaponAttachment),
//!     ["scope_that_was_removed"]
//! );
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
