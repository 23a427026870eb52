//! Check a catalog for invalid item references

use std::path::Path;

use slotlint::adapters::json::load_catalog;
use slotlint::config::CheckerConfig;
use slotlint::core::services::check_catalog;
use slotlint::output::{self, OutputMode};

/// Load a catalog, run every pass and render the report
pub fn check(
    catalog_path: &Path,
    config_path: Option<&Path>,
    strict: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = CheckerConfig::load(config_path, &cwd)?;

    let catalog = load_catalog(catalog_path, config.base_nodes())?;
    let report = check_catalog(&catalog, &config.slot_rules());

    output::render(&report, mode);

    if strict && !report.is_clean() {
        anyhow::bail!("invalid item references found: {}", report.buckets.total());
    }

    Ok(())
}
