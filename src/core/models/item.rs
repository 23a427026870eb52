//! Item definition model
//!
//! An item definition describes one kind of catalog item and the slots other
//! items can be attached to.

use super::BaseCategory;

/// A named attachment point on an item
///
/// The filter lists, in declaration order, every item ID allowed to occupy
/// the slot. A slot that declared no filter carries an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    /// Slot name (e.g., `mod_magazine`)
    pub name: String,

    /// Item IDs permitted in this slot
    pub filter: Vec<String>,
}

impl Slot {
    /// Create a slot from a name and its allowed item IDs
    pub fn new<I, S>(name: impl Into<String>, filter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            filter: filter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDefinition {
    /// Unique item ID
    pub id: String,

    /// Parent node ID in the catalog hierarchy, if any
    pub parent: Option<String>,

    /// Base category the item belongs to
    pub category: BaseCategory,

    /// Slots in declaration order
    pub slots: Vec<Slot>,

    /// Maximum ammunition count (only meaningful for magazines)
    pub max_ammo_count: Option<AmmoCount>,
}

/// A declared maximum ammunition count
///
/// Magazines are only checked for the presence of a count, so a value that
/// is not a plain `u32` is kept verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmmoCount {
    /// A well-formed count
    Count(u32),
    /// Any other declared value, as written in the source
    Unparsed(String),
}

impl ItemDefinition {
    /// Create an item with no parent, slots or capacity
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the parent node ID
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the base category
    #[must_use]
    pub const fn with_category(mut self, category: BaseCategory) -> Self {
        self.category = category;
        self
    }

    /// Append a slot
    #[must_use]
    pub fn with_slot<I, S>(mut self, name: impl Into<String>, filter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slots.push(Slot::new(name, filter));
        self
    }

    /// Set the maximum ammunition count
    #[must_use]
    pub fn with_max_ammo_count(mut self, count: u32) -> Self {
        self.max_ammo_count = Some(AmmoCount::Count(count));
        self
    }
}
