//! slotlint - Find dangling item references in slot filters
//!
//! Loads an item catalog, walks every slot filter from the weapon and
//! equipment roots and the rest of the catalog, and reports referenced IDs
//! that the catalog does not define.

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

mod cli;
mod commands;

/// Main entry point for the slotlint CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
