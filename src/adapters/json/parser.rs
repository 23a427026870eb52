//! JSON parser for item catalog files
//!
//! Accepts either an object keyed by item ID or an array of items. Field
//! names follow the game's template format:
//!
//! ```json
//! {
//!   "w1": {
//!     "_id": "w1",
//!     "_parent": "5422acb9af1c889c16000029",
//!     "_props": {
//!       "Slots": [
//!         { "_name": "mod_magazine", "_props": { "filters": [{ "Filter": ["m1"] }] } }
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! Every nested field is optional; a missing or `null` value reads as empty,
//! and `null` entries inside `Slots`, `filters` and `Filter` are skipped.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::adapters::error::CatalogError;
use crate::core::models::{AmmoCount, ItemDefinition, Slot};

/// A raw item template
#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(rename = "_id", default)]
    id: Option<String>,
    #[serde(rename = "_parent", default)]
    parent: Option<String>,
    #[serde(rename = "_props", default)]
    props: Option<RawProps>,
}

#[derive(Debug, Deserialize)]
struct RawProps {
    #[serde(rename = "Slots", default)]
    slots: Option<Vec<Option<RawSlot>>>,
    #[serde(rename = "Cartridges", default)]
    cartridges: Option<Vec<Option<RawCartridge>>>,
}

#[derive(Debug, Deserialize)]
struct RawSlot {
    #[serde(rename = "_name", default)]
    name: Option<String>,
    #[serde(rename = "_props", default)]
    props: Option<RawSlotProps>,
}

#[derive(Debug, Deserialize)]
struct RawSlotProps {
    #[serde(default)]
    filters: Option<Vec<Option<RawFilter>>>,
}

#[derive(Debug, Deserialize)]
struct RawFilter {
    #[serde(rename = "Filter", default)]
    filter: Option<Vec<Option<String>>>,
}

#[derive(Debug, Deserialize)]
struct RawCartridge {
    /// Only presence matters, so any JSON type is accepted
    #[serde(rename = "_max_count", default)]
    max_count: Option<Value>,
}

impl RawSlot {
    /// Only the first filter group is consulted; a `null` group is empty
    fn into_slot(self) -> Slot {
        let filter = self
            .props
            .and_then(|p| p.filters)
            .and_then(|groups| groups.into_iter().next().flatten())
            .and_then(|group| group.filter)
            .map(|ids| ids.into_iter().flatten().collect())
            .unwrap_or_default();

        Slot {
            name: self.name.unwrap_or_default(),
            filter,
        }
    }
}

impl RawCartridge {
    fn into_count(self) -> Option<AmmoCount> {
        match self.max_count? {
            Value::Null => None,
            Value::Number(n) => Some(
                n.as_u64()
                    .and_then(|v| u32::try_from(v).ok())
                    .map_or_else(|| AmmoCount::Unparsed(n.to_string()), AmmoCount::Count),
            ),
            other => Some(AmmoCount::Unparsed(other.to_string())),
        }
    }
}

impl RawItem {
    fn into_definition(self, id: String) -> ItemDefinition {
        let (slots, cartridges) = self
            .props
            .map(|p| (p.slots.unwrap_or_default(), p.cartridges.unwrap_or_default()))
            .unwrap_or_default();

        ItemDefinition {
            id,
            parent: self.parent.filter(|p| !p.is_empty()),
            slots: slots.into_iter().flatten().map(RawSlot::into_slot).collect(),
            max_ammo_count: cartridges
                .into_iter()
                .next()
                .flatten()
                .and_then(RawCartridge::into_count),
            ..ItemDefinition::default()
        }
    }
}

/// Parse catalog JSON text; `path` is only used in error messages
pub fn parse_catalog(content: &str, path: &Path) -> Result<Vec<ItemDefinition>, CatalogError> {
    let parse_err = |source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let value: Value = serde_json::from_str(content).map_err(parse_err)?;

    match value {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, entry)| -> Result<ItemDefinition, CatalogError> {
                let mut raw: RawItem = serde_json::from_value(entry).map_err(parse_err)?;
                let id = raw.id.take().unwrap_or(key);
                Ok(raw.into_definition(id))
            })
            .collect(),
        Value::Array(entries) => entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| -> Result<ItemDefinition, CatalogError> {
                let mut raw: RawItem = serde_json::from_value(entry).map_err(parse_err)?;
                let id = raw.id.take().ok_or_else(|| CatalogError::MissingId {
                    path: path.to_path_buf(),
                    index,
                })?;
                Ok(raw.into_definition(id))
            })
            .collect(),
        _ => Err(CatalogError::UnexpectedShape {
            path: path.to_path_buf(),
        }),
    }
}

/// Load item definitions from one JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> Result<Vec<ItemDefinition>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&content, path)
}
