//! Item catalog, item entries, and the fixed-capacity inventory.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::alteration::AlterationSet;
use crate::error::ModelError;

/// Fixed number of inventory slots in a save record.
pub const INVENTORY_CAPACITY: usize = 10;

/// Closed catalog of item types.
///
/// Each kind owns a two-byte wire discriminant. `0` is reserved for empty
/// slots; anything the catalog does not recognize also decodes as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    ShortSword,
    LongSword,
    Dagger,
    HuntingBow,
    OakStaff,
    Mace,
    LeatherArmor,
    ChainMail,
    PlateArmor,
    IronHelm,
    Buckler,
    SilverRing,
    AmberAmulet,
    HealthPotion,
    ManaPotion,
    AntidotePhial,
}

impl ItemKind {
    /// All item kinds in discriminant order.
    pub const ALL: [ItemKind; 16] = [
        ItemKind::ShortSword,
        ItemKind::LongSword,
        ItemKind::Dagger,
        ItemKind::HuntingBow,
        ItemKind::OakStaff,
        ItemKind::Mace,
        ItemKind::LeatherArmor,
        ItemKind::ChainMail,
        ItemKind::PlateArmor,
        ItemKind::IronHelm,
        ItemKind::Buckler,
        ItemKind::SilverRing,
        ItemKind::AmberAmulet,
        ItemKind::HealthPotion,
        ItemKind::ManaPotion,
        ItemKind::AntidotePhial,
    ];

    /// Two-byte wire discriminant. Never zero.
    pub const fn discriminant(self) -> u16 {
        match self {
            ItemKind::ShortSword => 1,
            ItemKind::LongSword => 2,
            ItemKind::Dagger => 3,
            ItemKind::HuntingBow => 4,
            ItemKind::OakStaff => 5,
            ItemKind::Mace => 6,
            ItemKind::LeatherArmor => 7,
            ItemKind::ChainMail => 8,
            ItemKind::PlateArmor => 9,
            ItemKind::IronHelm => 10,
            ItemKind::Buckler => 11,
            ItemKind::SilverRing => 12,
            ItemKind::AmberAmulet => 13,
            ItemKind::HealthPotion => 14,
            ItemKind::ManaPotion => 15,
            ItemKind::AntidotePhial => 16,
        }
    }

    /// Look up an item kind by wire discriminant.
    pub fn from_discriminant(value: u16) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.discriminant() == value)
    }

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::ShortSword => "Short Sword",
            ItemKind::LongSword => "Long Sword",
            ItemKind::Dagger => "Dagger",
            ItemKind::HuntingBow => "Hunting Bow",
            ItemKind::OakStaff => "Oak Staff",
            ItemKind::Mace => "Mace",
            ItemKind::LeatherArmor => "Leather Armor",
            ItemKind::ChainMail => "Chain Mail",
            ItemKind::PlateArmor => "Plate Armor",
            ItemKind::IronHelm => "Iron Helm",
            ItemKind::Buckler => "Buckler",
            ItemKind::SilverRing => "Silver Ring",
            ItemKind::AmberAmulet => "Amber Amulet",
            ItemKind::HealthPotion => "Health Potion",
            ItemKind::ManaPotion => "Mana Potion",
            ItemKind::AntidotePhial => "Antidote Phial",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single inventory entry: an item kind with its level, stack count, and
/// attached alterations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub kind: ItemKind,
    pub level: u8,
    pub stack: u8,
    pub alterations: AlterationSet,
}

impl ItemEntry {
    /// Create an entry with a single item and no alterations.
    pub fn new(kind: ItemKind, level: u8) -> Self {
        Self {
            kind,
            level,
            stack: 1,
            alterations: AlterationSet::new(),
        }
    }

    /// Set the stack count.
    #[must_use]
    pub fn with_stack(mut self, stack: u8) -> Self {
        self.stack = stack;
        self
    }

    /// Attach an alteration set.
    #[must_use]
    pub fn with_alterations(mut self, alterations: AlterationSet) -> Self {
        self.alterations = alterations;
        self
    }
}

/// Fixed-capacity inventory. Slots hold `None` when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<Option<ItemEntry>>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// Create an empty inventory of [`INVENTORY_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            slots: vec![None; INVENTORY_CAPACITY],
        }
    }

    /// Number of slots, always [`INVENTORY_CAPACITY`].
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Entry at `index`, or `None` when empty or out of range.
    pub fn get(&self, index: usize) -> Option<&ItemEntry> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Place an entry (or clear with `None`) at `index`.
    pub fn set(&mut self, index: usize, entry: Option<ItemEntry>) -> Result<(), ModelError> {
        if index >= self.slots.len() {
            return Err(ModelError::SlotOutOfRange {
                index,
                capacity: self.slots.len(),
            });
        }
        self.slots[index] = entry;
        Ok(())
    }

    /// Place an entry in the first empty slot, returning its index.
    pub fn push(&mut self, entry: ItemEntry) -> Result<usize, ModelError> {
        let index = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(ModelError::SlotOutOfRange {
                index: self.slots.len(),
                capacity: self.slots.len(),
            })?;
        self.slots[index] = Some(entry);
        Ok(index)
    }

    /// Iterate over all slots in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&ItemEntry>> {
        self.slots.iter().map(Option::as_ref)
    }
}
