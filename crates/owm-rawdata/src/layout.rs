//! On-disk layout of a `.rawdata` save file.
//!
//! The file is a single fixed-size buffer partitioned into ordered members.
//! Offsets are computed once, statically, from the member sizes; the table
//! is contiguous and gap-free, and [`TOTAL_LEN`] equals the offset plus
//! size of the terminal [`Member::Ending`].
//!
//! # Structure
//!
//! | Member           | Offset | Size | Contents                                  |
//! |------------------|--------|------|-------------------------------------------|
//! | Signature        | 0      | 20   | magic header                              |
//! | Version          | 20     | 2    | u16 LE, informational only                |
//! | CreationDate     | 22     | 8    | f64 LE seconds since Unix epoch           |
//! | ModificationDate | 30     | 8    | f64 LE seconds since Unix epoch           |
//! | StageInfo        | 38     | 10   | u16 LE current level + u64 LE level mask  |
//! | PersonaName      | 48     | 24   | zero-padded UTF-8                         |
//! | CharacterClass   | 72     | 1    | u8 class discriminant, 0 = none           |
//! | Experience       | 73     | 8    | u64 LE                                    |
//! | UnlockedSkills   | 81     | 2    | u16 LE skill mask                         |
//! | EquippedItems    | 83     | 6    | u8 inventory index per slot, 0xFF = empty |
//! | Inventory        | 89     | 480  | 10 item entries of 48 bytes each          |
//! | Ending           | 569    | 13   | magic footer                              |
//!
//! All multi-byte integers are little-endian.

use std::ops::Range;

use owm_model::{ALTERATION_VALUE_SLOTS, EQUIPMENT_SLOT_COUNT, INVENTORY_CAPACITY};

/// Magic header identifying a save file.
pub const SIGNATURE: [u8; 20] = *b"OFWITCHESANDMAZESRAW";

/// Magic footer closing a save file.
pub const ENDING: [u8; 13] = *b"ENDOFRAWDATA!";

/// Format version written into the version member.
///
/// Read back but never used to branch decoding. If the layout ever changes
/// this constant must be bumped and a gated decode path added.
pub const FORMAT_VERSION: u16 = 1;

/// Byte capacity of the persona name member.
pub const PERSONA_NAME_LEN: usize = 24;

/// Wire value marking an empty equipment slot.
pub const EMPTY_EQUIPMENT_SLOT: u8 = 0xFF;

/// Size of one inventory item entry: kind u16, level u8, stack u8,
/// alteration mask u32, packed alteration values.
pub const ITEM_ENTRY_LEN: usize = 2 + 1 + 1 + 4 + ALTERATION_VALUE_SLOTS * 8;

/// Ordered members of the save record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Member {
    Signature,
    Version,
    CreationDate,
    ModificationDate,
    StageInfo,
    PersonaName,
    CharacterClass,
    Experience,
    UnlockedSkills,
    EquippedItems,
    Inventory,
    Ending,
}

/// All members in on-disk order.
pub const MEMBERS: [Member; 12] = [
    Member::Signature,
    Member::Version,
    Member::CreationDate,
    Member::ModificationDate,
    Member::StageInfo,
    Member::PersonaName,
    Member::CharacterClass,
    Member::Experience,
    Member::UnlockedSkills,
    Member::EquippedItems,
    Member::Inventory,
    Member::Ending,
];

impl Member {
    /// Size of this member in bytes.
    pub const fn size(self) -> usize {
        match self {
            Member::Signature => SIGNATURE.len(),
            Member::Version => 2,
            Member::CreationDate => 8,
            Member::ModificationDate => 8,
            Member::StageInfo => 2 + 8,
            Member::PersonaName => PERSONA_NAME_LEN,
            Member::CharacterClass => 1,
            Member::Experience => 8,
            Member::UnlockedSkills => 2,
            Member::EquippedItems => EQUIPMENT_SLOT_COUNT,
            Member::Inventory => INVENTORY_CAPACITY * ITEM_ENTRY_LEN,
            Member::Ending => ENDING.len(),
        }
    }

    /// Byte offset of this member, the sum of all predecessor sizes.
    pub const fn offset(self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self as usize {
            total += MEMBERS[i].size();
            i += 1;
        }
        total
    }

    /// Byte range of this member within the buffer.
    pub fn range(self) -> Range<usize> {
        let offset = self.offset();
        offset..offset + self.size()
    }

    /// Member name for diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Member::Signature => "signature",
            Member::Version => "version",
            Member::CreationDate => "creation date",
            Member::ModificationDate => "modification date",
            Member::StageInfo => "stage info",
            Member::PersonaName => "persona name",
            Member::CharacterClass => "character class",
            Member::Experience => "experience",
            Member::UnlockedSkills => "unlocked skills",
            Member::EquippedItems => "equipped items",
            Member::Inventory => "inventory",
            Member::Ending => "ending",
        }
    }
}

/// Total buffer length of a save file.
pub const TOTAL_LEN: usize = Member::Ending.offset() + Member::Ending.size();
