//! Report sink port
//!
//! Receives the assembled report sections for display.

use super::super::models::Section;

/// Destination for report sections
pub trait ReportSink {
    /// Receive one non-empty bucket section
    fn section(&mut self, section: &Section<'_>);

    /// Called once after the last section
    fn finish(&mut self) {}
}

/// Collects section lines; handy for hosts that post-process output
impl ReportSink for Vec<String> {
    fn section(&mut self, section: &Section<'_>) {
        self.push(section.line());
    }
}
