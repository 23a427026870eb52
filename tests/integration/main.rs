//! Integration tests for the slotlint CLI
//!
//! These tests write catalogs to disk and run the binary end to end.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a slotlint command
fn slotlint() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("slotlint"))
}

const WEAPON_BASE: &str = "5422acb9af1c889c16000029";
const EQUIPMENT_BASE: &str = "543be5f84bdc2dd4348b456a";

/// Catalog with a rifle whose magazine slot lists a capacity-less magazine
/// and a magazine that does not exist, plus an orphan with a dangling mount.
fn write_catalog(dir: &Path) -> std::path::PathBuf {
    let catalog = serde_json::json!({
        WEAPON_BASE: { "_id": WEAPON_BASE, "_parent": "" },
        EQUIPMENT_BASE: { "_id": EQUIPMENT_BASE, "_parent": "" },
        "rifle": {
            "_id": "rifle",
            "_parent": WEAPON_BASE,
            "_props": {
                "Slots": [{
                    "_name": "mod_magazine",
                    "_props": { "filters": [{ "Filter": ["mag_no_count", "mag_gone"] }] }
                }]
            }
        },
        "mag_no_count": { "_id": "mag_no_count", "_props": { "Cartridges": [] } },
        "orphan": {
            "_id": "orphan",
            "_props": {
                "Slots": [{ "_name": "mod_mount", "_props": { "filters": [{ "Filter": ["mount_gone"] }] } }]
            }
        }
    });
    let path = dir.join("items.json");
    fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();
    path
}

fn write_clean_catalog(dir: &Path) -> std::path::PathBuf {
    let catalog = serde_json::json!([
        { "_id": EQUIPMENT_BASE },
        {
            "_id": "vest",
            "_parent": EQUIPMENT_BASE,
            "_props": { "Slots": [{ "_name": "mod_pouch", "_props": { "filters": [{ "Filter": ["pouch"] }] } }] }
        },
        {
            "_id": "pouch",
            "_props": { "Slots": [{ "_name": "mod_back", "_props": { "filters": [{ "Filter": ["vest"] }] } }] }
        }
    ]);
    let path = dir.join("clean.json");
    fs::write(&path, catalog.to_string()).unwrap();
    path
}

#[test]
fn test_version() {
    slotlint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("slotlint"));
}

#[test]
fn test_version_subcommand() {
    slotlint()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("slotlint v{}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_version_subcommand_json() {
    let output = slotlint().args(["--json", "version"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json.get("hint").is_none());
}

#[test]
fn test_no_args_shows_info() {
    slotlint().assert().success().stdout(predicate::str::contains("slotlint v"));
}

#[test]
fn test_check_reports_buckets() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(temp.path());

    slotlint()
        .arg("check")
        .arg(&catalog)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"2 invalid weapon attachment IDs: ["mag_no_count","mag_gone"]"#,
        ))
        .stdout(predicate::str::contains(r#"1 remainder of extra invalid IDs: ["mount_gone"]"#))
        .stdout(predicate::str::contains("invalid equipment").not())
        .stdout(predicate::str::contains("Item checking complete"));
}

#[test]
fn test_check_json_output() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(temp.path());

    let output = slotlint()
        .args(["--json", "check"])
        .arg(&catalog)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["total"], 3);
    assert_eq!(json["buckets"][0]["bucket"], "invalid_weapon_attachment");
    assert_eq!(json["buckets"][1]["ids"][0], "mount_gone");
}

#[test]
fn test_checked_counts_base_nodes_and_missing_ids() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(temp.path());

    let output = slotlint()
        .args(["--json", "check"])
        .arg(&catalog)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    // Five catalog entries, both base nodes included, plus two missing IDs
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["checked"], 7);
}

#[test]
fn test_check_clean_catalog() {
    let temp = TempDir::new().unwrap();
    let catalog = write_clean_catalog(temp.path());

    slotlint()
        .args(["check", "--strict"])
        .arg(&catalog)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid").not())
        .stdout(predicate::str::contains("Item checking complete"));
}

#[test]
fn test_loose_catalog_values_still_load() {
    let temp = TempDir::new().unwrap();
    let catalog = serde_json::json!([
        { "_id": WEAPON_BASE },
        {
            "_id": "rifle",
            "_parent": WEAPON_BASE,
            "_props": {
                "Slots": [
                    null,
                    { "_name": "mod_magazine", "_props": { "filters": [{ "Filter": ["mag_float"] }] } },
                    { "_name": "mod_stock", "_props": { "filters": [null] } }
                ]
            }
        },
        { "_id": "mag_float", "_props": { "Cartridges": [{ "_max_count": 30.0 }] } }
    ]);
    let path = temp.path().join("loose.json");
    fs::write(&path, catalog.to_string()).unwrap();

    slotlint()
        .args(["check", "--strict"])
        .arg(&path)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid").not());
}

#[test]
fn test_strict_fails_on_invalid_references() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(temp.path());

    slotlint()
        .args(["check", "--strict"])
        .arg(&catalog)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid item references found"));
}

#[test]
fn test_check_directory() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("db");
    fs::create_dir_all(&db).unwrap();
    write_catalog(&db);
    fs::write(
        db.join("zz_mod.json"),
        r#"[{"_id": "mod_item", "_props": {"Slots": [{"_name": "mod_x", "_props": {"filters": [{"Filter": ["rifle", "nowhere"]}]}}]}}]"#,
    )
    .unwrap();

    slotlint()
        .arg("check")
        .arg(&db)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"2 remainder of extra invalid IDs: ["mount_gone","nowhere"]"#,
        ));
}

#[test]
fn test_config_changes_magazine_slots() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(temp.path());
    fs::write(temp.path().join("slotlint.toml"), "magazine_slots = []\n").unwrap();

    // With no magazine slots, only the missing magazine is reported
    slotlint()
        .arg("check")
        .arg(&catalog)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"1 invalid weapon attachment IDs: ["mag_gone"]"#));
}

#[test]
fn test_missing_catalog_fails() {
    let temp = TempDir::new().unwrap();

    slotlint()
        .args(["check", "does_not_exist.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog not found"));
}

#[test]
fn test_duplicate_ids_across_files_fail() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.json"), r#"[{"_id": "x"}]"#).unwrap();
    fs::write(temp.path().join("b.json"), r#"[{"_id": "x"}]"#).unwrap();

    slotlint()
        .args(["check", "."])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate item ID: x"));
}
