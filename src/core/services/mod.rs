//! Business logic services
//!
//! Pure orchestration logic over the catalog port. No I/O: the catalog is
//! passed in, a report comes out.
//!
//! - [`ledger`] - Run-scoped set of evaluated IDs
//! - [`classifier`] - Map a traversal context to a report bucket
//! - [`walker`] - Follow slot filters from one root
//! - [`scanner`] - Run all category passes in order

pub mod classifier;
pub mod ledger;
pub mod scanner;
pub mod walker;

pub use classifier::classify;
pub use ledger::Ledger;
pub use scanner::{Scanner, check_catalog};
pub use walker::Walker;
