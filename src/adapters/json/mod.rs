//! JSON catalog adapter
//!
//! - [`parser`] - Read item templates from one JSON document
//! - [`loader`] - Load a file or a directory tree into a [`MemoryCatalog`]
//!
//! [`MemoryCatalog`]: crate::adapters::memory::MemoryCatalog

pub mod loader;
pub mod parser;

pub use loader::{BaseNodes, load_catalog};
pub use parser::{load_file, parse_catalog};
