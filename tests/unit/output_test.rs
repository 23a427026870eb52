//! Tests for report rendering
//!
//! Reports render either as summary lines handed to a sink or as JSON.

use slotlint::core::models::{Bucket, Report};
use slotlint::output::{CheckOutput, OutputMode, emit};

use crate::common::mocks::RecordingSink;

fn sample_report() -> Report {
    let mut report = Report {
        checked: 7,
        ..Report::default()
    };
    report.buckets.insert(Bucket::InvalidWeaponAttachment, "M1");
    report.buckets.insert(Bucket::InvalidWeaponAttachment, "M2");
    report.buckets.insert(Bucket::Uncategorized, "X");
    report
}

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn emit_sends_only_non_empty_sections() {
    let mut sink = RecordingSink::default();
    emit(&sample_report(), &mut sink);

    assert_eq!(
        sink.lines,
        [
            r#"2 invalid weapon attachment IDs: ["M1","M2"]"#,
            r#"1 remainder of extra invalid IDs: ["X"]"#,
        ]
    );
    assert_eq!(sink.finished, 1);
}

#[test]
fn emit_clean_report_only_finishes() {
    let mut sink = RecordingSink::default();
    emit(&Report::default(), &mut sink);

    assert!(sink.lines.is_empty());
    assert_eq!(sink.finished, 1);
}

#[test]
fn vec_sink_collects_lines() {
    let mut lines: Vec<String> = Vec::new();
    emit(&sample_report(), &mut lines);
    assert_eq!(lines.len(), 2);
}

#[test]
fn check_output_serialization() {
    let output = CheckOutput::from(&sample_report());
    let json = serde_json::to_value(&output).unwrap();

    assert_eq!(json["passed"], false);
    assert_eq!(json["checked"], 7);
    assert_eq!(json["total"], 3);
    assert_eq!(json["buckets"][0]["bucket"], "invalid_weapon_attachment");
    assert_eq!(json["buckets"][0]["count"], 2);
    assert_eq!(json["buckets"][0]["ids"][1], "M2");
    assert_eq!(json["buckets"][1]["bucket"], "uncategorized");
    assert_eq!(json["buckets"].as_array().unwrap().len(), 2);
}

#[test]
fn check_output_clean() {
    let output = CheckOutput::from(&Report::default());
    assert!(output.passed);
    assert!(output.buckets.is_empty());
}
