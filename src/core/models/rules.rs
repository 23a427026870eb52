//! Structural rules applied during traversal

/// Default name of the magazine slot
pub const DEFAULT_MAGAZINE_SLOT: &str = "mod_magazine";

/// Slot rules for a run
///
/// A child reached through a magazine slot must declare a maximum
/// ammunition count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRules {
    /// Slot names treated as magazine slots
    pub magazine_slots: Vec<String>,
}

impl SlotRules {
    /// Rules with the given magazine slot names
    pub fn new<I, S>(magazine_slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            magazine_slots: magazine_slots.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a slot name identifies a magazine slot
    #[must_use]
    pub fn is_magazine(&self, slot_name: &str) -> bool {
        self.magazine_slots.iter().any(|s| s == slot_name)
    }
}

impl Default for SlotRules {
    fn default() -> Self {
        Self::new([DEFAULT_MAGAZINE_SLOT])
    }
}
