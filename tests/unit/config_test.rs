//! Tests for checker configuration

use std::fs;

use slotlint::config::{CONFIG_FILE, CheckerConfig, ConfigError, DEFAULT_WEAPON_BASE};
use tempfile::TempDir;

#[test]
fn defaults_without_file() {
    let dir = TempDir::new().unwrap();
    let config = CheckerConfig::load(None, dir.path()).unwrap();

    assert_eq!(config, CheckerConfig::default());
    assert_eq!(config.weapon_base, DEFAULT_WEAPON_BASE);
    assert!(config.slot_rules().is_magazine("mod_magazine"));
}

#[test]
fn picks_up_config_in_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "magazine_slots = [\"mod_magazine\", \"mag_well\"]\n")
        .unwrap();

    let config = CheckerConfig::load(None, dir.path()).unwrap();

    assert!(config.slot_rules().is_magazine("mag_well"));
    // Unset fields keep their defaults
    assert_eq!(config.weapon_base, DEFAULT_WEAPON_BASE);
}

#[test]
fn explicit_path_wins() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "weapon_base = \"implicit\"\n").unwrap();
    let explicit = dir.path().join("other.toml");
    fs::write(&explicit, "weapon_base = \"explicit\"\nequipment_base = \"gear\"\n").unwrap();

    let config = CheckerConfig::load(Some(explicit.as_path()), dir.path()).unwrap();

    assert_eq!(config.weapon_base, "explicit");
    assert_eq!(config.base_nodes().equipment, "gear");
}

#[test]
fn missing_explicit_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let absent = dir.path().join("absent.toml");
    let err = CheckerConfig::load(Some(absent.as_path()), dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn invalid_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "magazine_slots = 3\n").unwrap();

    let err = CheckerConfig::load(None, dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(CONFIG_FILE));
}
