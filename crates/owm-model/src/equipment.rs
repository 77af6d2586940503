//! Equipment slots and the equipped-item index table.
//!
//! Equipment does not own items; each slot holds an index into the
//! inventory. On the wire a slot is one byte, `0xFF` meaning empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of equipment slots.
pub const EQUIPMENT_SLOT_COUNT: usize = 6;

/// Named equipment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    MainHand,
    OffHand,
    Armor,
    Helm,
    Ring,
    Amulet,
}

impl EquipmentSlot {
    /// All slots in wire order.
    pub const ALL: [EquipmentSlot; EQUIPMENT_SLOT_COUNT] = [
        EquipmentSlot::MainHand,
        EquipmentSlot::OffHand,
        EquipmentSlot::Armor,
        EquipmentSlot::Helm,
        EquipmentSlot::Ring,
        EquipmentSlot::Amulet,
    ];

    /// Position within the wire table.
    pub const fn index(self) -> usize {
        match self {
            EquipmentSlot::MainHand => 0,
            EquipmentSlot::OffHand => 1,
            EquipmentSlot::Armor => 2,
            EquipmentSlot::Helm => 3,
            EquipmentSlot::Ring => 4,
            EquipmentSlot::Amulet => 5,
        }
    }

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            EquipmentSlot::MainHand => "Main Hand",
            EquipmentSlot::OffHand => "Off Hand",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Helm => "Helm",
            EquipmentSlot::Ring => "Ring",
            EquipmentSlot::Amulet => "Amulet",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-slot inventory indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentTable {
    slots: [Option<u8>; EQUIPMENT_SLOT_COUNT],
}

impl EquipmentTable {
    /// Empty table: nothing equipped.
    pub const fn new() -> Self {
        Self {
            slots: [None; EQUIPMENT_SLOT_COUNT],
        }
    }

    /// Inventory index equipped in `slot`, if any.
    pub fn get(self, slot: EquipmentSlot) -> Option<u8> {
        self.slots[slot.index()]
    }

    /// Equip (or clear with `None`) an inventory index in `slot`.
    pub fn set(&mut self, slot: EquipmentSlot, index: Option<u8>) {
        self.slots[slot.index()] = index;
    }

    /// Iterate over (slot, index) pairs in wire order.
    pub fn iter(self) -> impl Iterator<Item = (EquipmentSlot, Option<u8>)> {
        EquipmentSlot::ALL
            .into_iter()
            .map(move |slot| (slot, self.slots[slot.index()]))
    }

    /// Number of occupied slots.
    pub fn occupied(self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_indices_cover_the_table() {
        for (expected, slot) in EquipmentSlot::ALL.into_iter().enumerate() {
            assert_eq!(slot.index(), expected);
        }
    }

    #[test]
    fn set_and_get() {
        let mut table = EquipmentTable::new();
        table.set(EquipmentSlot::MainHand, Some(2));
        table.set(EquipmentSlot::Ring, Some(7));
        assert_eq!(table.get(EquipmentSlot::MainHand), Some(2));
        assert_eq!(table.get(EquipmentSlot::Ring), Some(7));
        assert_eq!(table.get(EquipmentSlot::Helm), None);
        assert_eq!(table.occupied(), 2);

        table.set(EquipmentSlot::MainHand, None);
        assert_eq!(table.occupied(), 1);
    }
}
