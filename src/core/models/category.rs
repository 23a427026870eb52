//! Categories, traversal contexts and report buckets
//!
//! Three small closed enums:
//! - [`BaseCategory`] - what an item *is* (weapon, equipment, other)
//! - [`Context`] - which root pass a traversal started from
//! - [`Bucket`] - where a dangling reference is reported

/// Base category of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaseCategory {
    /// Descends from the weapon base node
    Weapon,
    /// Descends from the equipment base node
    Equipment,
    /// Anything else
    #[default]
    Other,
}

impl std::fmt::Display for BaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Equipment => write!(f, "equipment"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// The root pass under which a traversal was started
///
/// Every discovery made below a root is attributed to this context, never to
/// the category of the item where the discovery happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    /// Weapon root existence pass
    Weapon,
    /// Everything reachable from weapon slots
    WeaponAttachment,
    /// Equipment root existence pass
    Equipment,
    /// Everything reachable from equipment slots
    EquipmentAttachment,
    /// Items untouched by the four category passes
    Remainder,
}

impl Context {
    /// All contexts in pass order
    pub const ALL: [Self; 5] = [
        Self::Weapon,
        Self::WeaponAttachment,
        Self::Equipment,
        Self::EquipmentAttachment,
        Self::Remainder,
    ];
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::WeaponAttachment => write!(f, "weapon attachment"),
            Self::Equipment => write!(f, "equipment"),
            Self::EquipmentAttachment => write!(f, "equipment attachment"),
            Self::Remainder => write!(f, "remainder"),
        }
    }
}

/// Report bucket for an invalid item ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Invalid weapon root
    InvalidWeapon,
    /// Invalid ID below a weapon, or a malformed magazine
    InvalidWeaponAttachment,
    /// Invalid equipment root
    InvalidEquipment,
    /// Invalid ID below an equipment item
    InvalidEquipmentAttachment,
    /// Invalid ID found by the remainder pass
    Uncategorized,
}

impl Bucket {
    /// All buckets in report order
    pub const ALL: [Self; 5] = [
        Self::InvalidWeapon,
        Self::InvalidWeaponAttachment,
        Self::InvalidEquipment,
        Self::InvalidEquipmentAttachment,
        Self::Uncategorized,
    ];

    /// Position in [`Bucket::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::InvalidWeapon => 0,
            Self::InvalidWeaponAttachment => 1,
            Self::InvalidEquipment => 2,
            Self::InvalidEquipmentAttachment => 3,
            Self::Uncategorized => 4,
        }
    }

    /// Human-readable label used in report lines
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InvalidWeapon => "invalid weapon IDs",
            Self::InvalidWeaponAttachment => "invalid weapon attachment IDs",
            Self::InvalidEquipment => "invalid equipment IDs",
            Self::InvalidEquipmentAttachment => "invalid equipment attachment IDs",
            Self::Uncategorized => "remainder of extra invalid IDs",
        }
    }

    /// Stable machine-readable key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::InvalidWeapon => "invalid_weapon",
            Self::InvalidWeaponAttachment => "invalid_weapon_attachment",
            Self::InvalidEquipment => "invalid_equipment",
            Self::InvalidEquipmentAttachment => "invalid_equipment_attachment",
            Self::Uncategorized => "uncategorized",
        }
    }
}

impl From<Context> for Bucket {
    fn from(context: Context) -> Self {
        match context {
            Context::Weapon => Self::InvalidWeapon,
            Context::WeaponAttachment => Self::InvalidWeaponAttachment,
            Context::Equipment => Self::InvalidEquipment,
            Context::EquipmentAttachment => Self::InvalidEquipmentAttachment,
            Context::Remainder => Self::Uncategorized,
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
