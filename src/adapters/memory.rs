//! In-memory catalog
//!
//! Holds item definitions in load order with an ID index. Used directly by
//! programmatic hosts and tests, and as the target of the JSON loader.

use std::collections::{HashMap, HashSet};

use super::error::CatalogError;
use crate::core::models::{BaseCategory, ItemDefinition};
use crate::core::ports::Catalog;

/// Catalog backed by a `Vec` plus an ID index
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    items: Vec<ItemDefinition>,
    index: HashMap<String, usize>,
}

impl MemoryCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from items, keeping their order
    pub fn from_items<I>(items: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = ItemDefinition>,
    {
        let mut catalog = Self::new();
        for item in items {
            catalog.insert(item)?;
        }
        Ok(catalog)
    }

    /// Add an item; rejects an ID that is already present
    pub fn insert(&mut self, item: ItemDefinition) -> Result<(), CatalogError> {
        if self.index.contains_key(&item.id) {
            return Err(CatalogError::DuplicateId { id: item.id });
        }
        self.index.insert(item.id.clone(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Derive each item's base category from its `parent` chain
    ///
    /// The nearest ancestor equal to one of the base node IDs decides; items
    /// with neither ancestor are `Other`. Parent cycles are cut.
    pub fn resolve_categories(&mut self, weapon_base: &str, equipment_base: &str) {
        let categories: Vec<BaseCategory> = self
            .items
            .iter()
            .map(|item| self.category_from_parents(item, weapon_base, equipment_base))
            .collect();

        for (item, category) in self.items.iter_mut().zip(categories) {
            item.category = category;
        }
    }

    fn category_from_parents(
        &self,
        item: &ItemDefinition,
        weapon_base: &str,
        equipment_base: &str,
    ) -> BaseCategory {
        let mut seen = HashSet::new();
        let mut current = item.parent.as_deref();

        while let Some(parent) = current {
            if parent == weapon_base {
                return BaseCategory::Weapon;
            }
            if parent == equipment_base {
                return BaseCategory::Equipment;
            }
            if !seen.insert(parent) {
                log::warn!("Parent cycle detected at {parent} while classifying {}", item.id);
                break;
            }
            current = self.get(parent).and_then(|p| p.parent.as_deref());
        }
        BaseCategory::Other
    }
}

impl Catalog for MemoryCatalog {
    fn get(&self, id: &str) -> Option<&ItemDefinition> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    fn items(&self) -> Box<dyn Iterator<Item = &ItemDefinition> + '_> {
        Box::new(self.items.iter())
    }
}
