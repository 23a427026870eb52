//! Port traits (interfaces) for external collaborators
//!
//! The core reads the catalog and hands reports to a sink; both sit behind
//! these traits. Implementations live in the `adapters` and `output` modules.

mod catalog;
mod sink;

pub use catalog::Catalog;
pub use sink::ReportSink;
