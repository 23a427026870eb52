//! Adapter implementations for port traits
//!
//! This module contains the concrete catalog implementations:
//!
//! - `memory` - In-memory catalog with an ID index
//! - `json/` - Loading item templates from JSON files
//! - `error` - Errors raised while building a catalog

pub mod error;
pub mod json;
pub mod memory;

pub use error::CatalogError;
pub use memory::MemoryCatalog;
