//! Core domain logic for slotlint
//!
//! This module contains pure business logic with no I/O dependencies.
//! The catalog and the report destination are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ItemDefinition`, `Slot`, `Bucket`, `Report`)
//! - `services/` - Traversal and classification
//! - `ports/` - Trait definitions for the catalog and report sink

pub mod models;
pub mod ports;
pub mod services;
