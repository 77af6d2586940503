//! Alteration stats: named numeric modifiers attached to items.
//!
//! On the wire an alteration set is a 32-bit mask plus a dense array of
//! signed 64-bit values. The mask says *which* stats are present; the value
//! array holds their magnitudes packed contiguously from index 0 in
//! **ascending mask-bit order**. Decoding replays the same ascending order
//! to re-associate values with stats, so a set built from stats in any
//! input order always lands in the same wire bytes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ModelError;

/// Fixed number of packed value slots per item entry.
///
/// An item can carry at most this many alterations even though the mask has
/// room for 32 distinct stats.
pub const ALTERATION_VALUE_SLOTS: usize = 5;

/// A named stat modifier. Each kind owns a fixed bit position in the
/// 32-bit alteration mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlterationKind {
    Health,
    Mana,
    Attack,
    Defense,
    CritChance,
    AttackSpeed,
    MoveSpeed,
    FireResistance,
    ColdResistance,
    PoisonResistance,
    LifeSteal,
    GoldFind,
}

impl AlterationKind {
    /// All kinds in ascending bit order.
    pub const ALL: [AlterationKind; 12] = [
        AlterationKind::Health,
        AlterationKind::Mana,
        AlterationKind::Attack,
        AlterationKind::Defense,
        AlterationKind::CritChance,
        AlterationKind::AttackSpeed,
        AlterationKind::MoveSpeed,
        AlterationKind::FireResistance,
        AlterationKind::ColdResistance,
        AlterationKind::PoisonResistance,
        AlterationKind::LifeSteal,
        AlterationKind::GoldFind,
    ];

    /// Bit position in the alteration mask, 0..32.
    pub const fn bit(self) -> u8 {
        match self {
            AlterationKind::Health => 0,
            AlterationKind::Mana => 1,
            AlterationKind::Attack => 2,
            AlterationKind::Defense => 3,
            AlterationKind::CritChance => 4,
            AlterationKind::AttackSpeed => 5,
            AlterationKind::MoveSpeed => 6,
            AlterationKind::FireResistance => 7,
            AlterationKind::ColdResistance => 8,
            AlterationKind::PoisonResistance => 9,
            AlterationKind::LifeSteal => 10,
            AlterationKind::GoldFind => 11,
        }
    }

    /// Single-bit mask for this kind.
    pub const fn mask_bit(self) -> u32 {
        1 << self.bit()
    }

    /// Look up a kind by mask bit position.
    pub fn from_bit(bit: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.bit() == bit)
    }

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            AlterationKind::Health => "Health",
            AlterationKind::Mana => "Mana",
            AlterationKind::Attack => "Attack",
            AlterationKind::Defense => "Defense",
            AlterationKind::CritChance => "Crit Chance",
            AlterationKind::AttackSpeed => "Attack Speed",
            AlterationKind::MoveSpeed => "Move Speed",
            AlterationKind::FireResistance => "Fire Resistance",
            AlterationKind::ColdResistance => "Cold Resistance",
            AlterationKind::PoisonResistance => "Poison Resistance",
            AlterationKind::LifeSteal => "Life Steal",
            AlterationKind::GoldFind => "Gold Find",
        }
    }
}

impl fmt::Display for AlterationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of alterations with their values.
///
/// Backed by a `BTreeMap` keyed on [`AlterationKind`], whose ordering
/// matches ascending mask-bit order, so iteration and packing agree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterationSet {
    values: BTreeMap<AlterationKind, i64>,
}

impl AlterationSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from (kind, value) pairs in any order.
    ///
    /// Inserting the same kind twice keeps the last value. Fails when the
    /// distinct kinds exceed [`ALTERATION_VALUE_SLOTS`].
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (AlterationKind, i64)>,
    ) -> Result<Self, ModelError> {
        let mut set = Self::new();
        for (kind, value) in pairs {
            set.insert(kind, value)?;
        }
        Ok(set)
    }

    /// Insert or replace a stat value.
    pub fn insert(&mut self, kind: AlterationKind, value: i64) -> Result<(), ModelError> {
        if !self.values.contains_key(&kind) && self.values.len() >= ALTERATION_VALUE_SLOTS {
            return Err(ModelError::TooManyAlterations {
                count: self.values.len() + 1,
                capacity: ALTERATION_VALUE_SLOTS,
            });
        }
        self.values.insert(kind, value);
        Ok(())
    }

    /// Value for a stat, if present.
    pub fn get(&self, kind: AlterationKind) -> Option<i64> {
        self.values.get(&kind).copied()
    }

    /// Number of stats in the set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no stats are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over (kind, value) pairs in ascending mask-bit order.
    pub fn iter(&self) -> impl Iterator<Item = (AlterationKind, i64)> + '_ {
        self.values.iter().map(|(kind, value)| (*kind, *value))
    }

    /// 32-bit presence mask: bit i set iff the stat with bit i is present.
    pub fn mask(&self) -> u32 {
        self.values.keys().fold(0, |mask, kind| mask | kind.mask_bit())
    }

    /// Values packed in ascending mask-bit order, zero-filled to the fixed
    /// slot count.
    pub fn packed_values(&self) -> [i64; ALTERATION_VALUE_SLOTS] {
        let mut packed = [0i64; ALTERATION_VALUE_SLOTS];
        for (slot, (_, value)) in self.values.iter().take(ALTERATION_VALUE_SLOTS).enumerate() {
            packed[slot] = *value;
        }
        packed
    }

    /// Rebuild a set from a mask and a packed value array.
    ///
    /// Walks mask bits in ascending order, consuming one value slot per set
    /// bit. A set bit with no catalog kind still consumes its slot; the
    /// value is dropped. Slots past the end of `values` read as zero.
    pub fn from_mask_and_values(mask: u32, values: &[i64]) -> Self {
        let mut set = Self::new();
        let mut slot = 0usize;
        for bit in 0..32u8 {
            if mask & (1 << bit) == 0 {
                continue;
            }
            let value = values.get(slot).copied().unwrap_or(0);
            slot += 1;
            if let Some(kind) = AlterationKind::from_bit(bit) {
                // Capacity cannot overflow here: each bit maps to a distinct
                // kind and slots beyond the fixed count carry zero anyway.
                let _ = set.values.insert(kind, value);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_reflects_bits() {
        let set = AlterationSet::from_pairs([
            (AlterationKind::Attack, 7),
            (AlterationKind::Health, 40),
        ])
        .unwrap();
        assert_eq!(set.mask(), 0b101);
    }

    #[test]
    fn packing_is_ascending_bit_order_regardless_of_input_order() {
        let forward = AlterationSet::from_pairs([
            (AlterationKind::Health, 10),
            (AlterationKind::Defense, 3),
            (AlterationKind::GoldFind, 25),
        ])
        .unwrap();
        let reversed = AlterationSet::from_pairs([
            (AlterationKind::GoldFind, 25),
            (AlterationKind::Defense, 3),
            (AlterationKind::Health, 10),
        ])
        .unwrap();

        assert_eq!(forward.mask(), reversed.mask());
        assert_eq!(forward.packed_values(), reversed.packed_values());
        assert_eq!(forward.packed_values()[..3], [10, 3, 25]);
    }

    #[test]
    fn mask_value_round_trip() {
        let set = AlterationSet::from_pairs([
            (AlterationKind::Mana, -5),
            (AlterationKind::CritChance, 12),
            (AlterationKind::LifeSteal, 2),
        ])
        .unwrap();
        let rebuilt = AlterationSet::from_mask_and_values(set.mask(), &set.packed_values());
        assert_eq!(rebuilt, set);
    }

    #[test]
    fn unknown_mask_bit_drops_its_value() {
        // Bit 12 has no catalog kind; its value slot is consumed and the
        // value discarded, leaving the known stat intact.
        let mask = (1 << 12) | AlterationKind::Attack.mask_bit();
        let values = [7i64, 99, 0, 0, 0];
        let set = AlterationSet::from_mask_and_values(mask, &values);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(AlterationKind::Attack), Some(7));
    }

    #[test]
    fn capacity_is_enforced() {
        let mut set = AlterationSet::new();
        for kind in AlterationKind::ALL.into_iter().take(ALTERATION_VALUE_SLOTS) {
            set.insert(kind, 1).unwrap();
        }
        let overflow = set.insert(AlterationKind::GoldFind, 1);
        assert!(matches!(
            overflow,
            Err(ModelError::TooManyAlterations { .. })
        ));
        // Replacing an existing kind is still fine at capacity.
        set.insert(AlterationKind::Health, 2).unwrap();
    }
}
