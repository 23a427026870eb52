//! Output formatting for human and JSON modes
//!
//! Renders a checker [`Report`] either as one summary line per non-empty
//! bucket or as machine-parseable JSON with the same shape: an optional
//! section per bucket, each with a count and an ID list.

use serde::Serialize;

use crate::core::models::{Report, Section};
use crate::core::ports::ReportSink;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Sink that prints each section line to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn section(&mut self, section: &Section<'_>) {
        println!("{}", section.line());
    }

    fn finish(&mut self) {
        println!("Item checking complete");
    }
}

/// One bucket in JSON output
#[derive(Debug, Serialize)]
pub struct BucketOutput {
    /// Bucket key (e.g., "invalid_weapon_attachment")
    pub bucket: String,
    /// Number of IDs
    pub count: usize,
    /// IDs in discovery order
    pub ids: Vec<String>,
}

/// Result of a check run
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    /// Whether no invalid IDs were found
    pub passed: bool,
    /// Distinct IDs evaluated
    pub checked: usize,
    /// Total invalid IDs across buckets
    pub total: usize,
    /// Non-empty buckets in report order
    pub buckets: Vec<BucketOutput>,
}

impl From<&Report> for CheckOutput {
    fn from(report: &Report) -> Self {
        Self {
            passed: report.is_clean(),
            checked: report.checked,
            total: report.buckets.total(),
            buckets: report
                .sections()
                .into_iter()
                .map(|s| BucketOutput {
                    bucket: s.bucket.key().to_string(),
                    count: s.count(),
                    ids: s.ids.to_vec(),
                })
                .collect(),
        }
    }
}

/// Hand every non-empty section of a report to a sink
pub fn emit(report: &Report, sink: &mut dyn ReportSink) {
    for section in report.sections() {
        sink.section(&section);
    }
    sink.finish();
}

/// Render a report based on output mode
pub fn render(report: &Report, mode: OutputMode) {
    match mode {
        OutputMode::Human => emit(report, &mut ConsoleSink),
        OutputMode::Json => {
            let output = CheckOutput::from(report);
            println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        },
    }
}
