//! Catalog port
//!
//! Defines read-only access to the item catalog.

use super::super::models::{BaseCategory, ItemDefinition};

/// Read-only item catalog
///
/// A missing ID is reported as `None`/`false`, never as an error: absence is
/// exactly what the checker is looking for.
pub trait Catalog: Send + Sync {
    /// Look up an item definition by ID
    fn get(&self, id: &str) -> Option<&ItemDefinition>;

    /// All items in catalog order
    fn items(&self) -> Box<dyn Iterator<Item = &ItemDefinition> + '_>;

    /// Whether an item with this ID exists
    fn exists(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Base category of an item (`Other` when the ID is unknown)
    fn base_category_of(&self, id: &str) -> BaseCategory {
        self.get(id).map_or(BaseCategory::Other, |item| item.category)
    }

    /// All items of one base category, in catalog order
    fn items_of(&self, category: BaseCategory) -> Vec<&ItemDefinition> {
        self.items().filter(|item| item.category == category).collect()
    }
}
