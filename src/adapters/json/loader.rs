//! Catalog loader for files and directories
//!
//! A directory is scanned recursively for `*.json` files (hidden entries
//! skipped). Files are merged in sorted path order so the resulting catalog
//! order, and with it the report, is reproducible.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::parser::load_file;
use crate::adapters::error::CatalogError;
use crate::adapters::memory::MemoryCatalog;

/// Base node IDs used to derive item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseNodes<'a> {
    /// Weapon base node ID
    pub weapon: &'a str,
    /// Equipment base node ID
    pub equipment: &'a str,
}

/// Load a catalog from a JSON file or a directory of JSON files
///
/// # Errors
///
/// Returns an error if the path is missing, a file cannot be read or parsed,
/// or the same item ID appears twice.
pub fn load_catalog(path: &Path, bases: BaseNodes<'_>) -> Result<MemoryCatalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let files = if path.is_dir() {
        find_json_files(path)?
    } else {
        vec![path.to_path_buf()]
    };

    let mut catalog = MemoryCatalog::new();
    for file in &files {
        let items = load_file(file)?;
        log::debug!("Loaded {} item(s) from {}", items.len(), file.display());
        for item in items {
            catalog.insert(item)?;
        }
    }

    if catalog.is_empty() {
        log::warn!("No items found in {}", path.display());
    }

    catalog.resolve_categories(bases.weapon, bases.equipment);
    log::info!("Catalog loaded: {} item(s) from {} file(s)", catalog.len(), files.len());
    Ok(catalog)
}

/// All `*.json` files below `root`, sorted
fn find_json_files(root: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).into_iter().filter_entry(|e| {
        // Don't filter the root directory itself
        e.path() == root || !is_hidden(e)
    }) {
        let entry = entry.map_err(|source| CatalogError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|ext| ext == "json")
        {
            files.push(entry.into_path());
        }
    }

    // Sort for deterministic catalog order
    files.sort();
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}
