//! Save record decoder.
//!
//! Decoding validates the outer frame first, all-or-nothing: exact buffer
//! length, then the signature and ending magic. Only after those pass is
//! each member sliced out by its precomputed range and reinterpreted
//! independently.
//!
//! Inside the frame the policy is deliberately lenient: an unrecognized
//! item discriminant empties that inventory slot without touching its
//! neighbours, an unrecognized class discriminant decodes to `None`, and
//! an equipment index pointing outside the inventory reads as unequipped.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use owm_model::{
    AlterationSet, CharacterClass, EquipmentSlot, EquipmentTable, INVENTORY_CAPACITY, Inventory,
    ItemEntry, ItemKind, LevelMask, SaveRecord, SkillSet, StageProgress,
};

use crate::error::{RawDataError, Result};
use crate::layout::{ENDING, ITEM_ENTRY_LEN, Member, SIGNATURE, TOTAL_LEN};

/// Save file reader over any [`Read`] source.
pub struct RawDataReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> RawDataReader<R> {
    /// Create a new reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Read the full buffer and decode it, consuming the reader.
    pub fn read_record(mut self) -> Result<SaveRecord> {
        let mut data = Vec::new();
        self.reader.read_to_end(&mut data)?;
        decode_record(&data)
    }
}

impl RawDataReader<File> {
    /// Open a save file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RawDataError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                RawDataError::Io(e)
            }
        })?;
        Ok(Self::new(file))
    }
}

/// Read and decode a save file.
pub fn read_rawdata(path: &Path) -> Result<SaveRecord> {
    RawDataReader::open(path)?.read_record()
}

/// Decode a save buffer into a record.
pub fn decode_record(data: &[u8]) -> Result<SaveRecord> {
    validate_frame(data)?;

    Ok(SaveRecord {
        creation_date: f64::from_le_bytes(fixed::<8>(data, Member::CreationDate.offset())),
        modification_date: f64::from_le_bytes(fixed::<8>(data, Member::ModificationDate.offset())),
        stage: decode_stage(data),
        persona_name: decode_persona_name(&data[Member::PersonaName.range()]),
        character_class: CharacterClass::from_discriminant(
            data[Member::CharacterClass.offset()],
        ),
        experience: u64::from_le_bytes(fixed::<8>(data, Member::Experience.offset())),
        skills: SkillSet::from_mask(u16::from_le_bytes(fixed::<2>(
            data,
            Member::UnlockedSkills.offset(),
        ))),
        equipment: decode_equipment(&data[Member::EquippedItems.range()]),
        inventory: decode_inventory(&data[Member::Inventory.range()]),
    })
}

/// Outer validation: exact length, then both magic markers.
pub fn validate_frame(data: &[u8]) -> Result<()> {
    if data.len() != TOTAL_LEN {
        return Err(RawDataError::WrongLength {
            expected: TOTAL_LEN,
            actual: data.len(),
        });
    }
    if data[Member::Signature.range()] != SIGNATURE {
        return Err(RawDataError::BadSignature);
    }
    if data[Member::Ending.range()] != ENDING {
        return Err(RawDataError::BadEnding);
    }
    Ok(())
}

/// Copy `N` bytes starting at `offset` into a fixed array.
///
/// Callers only reach this after `validate_frame`, so the range is always
/// inside the buffer.
fn fixed<const N: usize>(data: &[u8], offset: usize) -> [u8; N] {
    let mut buf = [0u8; N];
    buf.copy_from_slice(&data[offset..offset + N]);
    buf
}

fn decode_stage(data: &[u8]) -> StageProgress {
    let offset = Member::StageInfo.offset();
    StageProgress {
        current_level: u16::from_le_bytes(fixed::<2>(data, offset)),
        completed: LevelMask::from_mask(u64::from_le_bytes(fixed::<8>(data, offset + 2))),
    }
}

/// Decode a zero-padded UTF-8 name, lossily on invalid sequences.
fn decode_persona_name(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

fn decode_equipment(field: &[u8]) -> EquipmentTable {
    let mut table = EquipmentTable::new();
    for slot in EquipmentSlot::ALL {
        let raw = field[slot.index()];
        // Out-of-range indices read as unequipped.
        if (raw as usize) < INVENTORY_CAPACITY {
            table.set(slot, Some(raw));
        }
    }
    table
}

fn decode_inventory(field: &[u8]) -> Inventory {
    let mut inventory = Inventory::new();
    for slot in 0..INVENTORY_CAPACITY {
        let start = slot * ITEM_ENTRY_LEN;
        let entry = decode_item_entry(&field[start..start + ITEM_ENTRY_LEN]);
        // Slot index is always in range; set cannot fail here.
        let _ = inventory.set(slot, entry);
    }
    inventory
}

/// Decode one item entry, or `None` when the kind discriminant is zero or
/// unrecognized.
fn decode_item_entry(field: &[u8]) -> Option<ItemEntry> {
    let discriminant = u16::from_le_bytes(fixed::<2>(field, 0));
    let kind = ItemKind::from_discriminant(discriminant)?;

    let mask = u32::from_le_bytes(fixed::<4>(field, 4));
    let mut values = Vec::with_capacity((field.len() - 8) / 8);
    let mut pos = 8;
    while pos + 8 <= field.len() {
        values.push(i64::from_le_bytes(fixed::<8>(field, pos)));
        pos += 8;
    }

    Some(ItemEntry {
        kind,
        level: field[2],
        stack: field[3],
        alterations: AlterationSet::from_mask_and_values(mask, &values),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_record;

    fn sample_record() -> SaveRecord {
        SaveRecord::new("Morgana", CharacterClass::Wizard, 1_700_000_000.0)
    }

    #[test]
    fn wrong_length_is_refused() {
        let buffer = encode_record(&sample_record());
        let truncated = &buffer[..buffer.len() - 1];
        assert!(matches!(
            decode_record(truncated),
            Err(RawDataError::WrongLength { .. })
        ));
    }

    #[test]
    fn bad_signature_is_refused() {
        let mut buffer = encode_record(&sample_record());
        buffer[0] ^= 0xFF;
        assert!(matches!(
            decode_record(&buffer),
            Err(RawDataError::BadSignature)
        ));
    }

    #[test]
    fn bad_ending_is_refused() {
        let mut buffer = encode_record(&sample_record());
        let last = buffer.len() - 1;
        buffer[last] ^= 0xFF;
        assert!(matches!(
            decode_record(&buffer),
            Err(RawDataError::BadEnding)
        ));
    }

    #[test]
    fn unknown_class_decodes_as_none() {
        let mut buffer = encode_record(&sample_record());
        buffer[Member::CharacterClass.offset()] = 250;
        let record = decode_record(&buffer).unwrap();
        assert_eq!(record.character_class, None);
        assert_eq!(record.persona_name, "Morgana");
    }

    #[test]
    fn out_of_range_equipment_index_reads_as_empty() {
        let mut record = sample_record();
        record
            .inventory
            .set(0, Some(ItemEntry::new(ItemKind::OakStaff, 1)))
            .unwrap();
        record.equipment.set(EquipmentSlot::MainHand, Some(0));

        let mut buffer = encode_record(&record);
        let offset = Member::EquippedItems.offset() + EquipmentSlot::Ring.index();
        buffer[offset] = INVENTORY_CAPACITY as u8; // one past the end
        let decoded = decode_record(&buffer).unwrap();
        assert_eq!(decoded.equipment.get(EquipmentSlot::Ring), None);
        assert_eq!(decoded.equipment.get(EquipmentSlot::MainHand), Some(0));
    }

    #[test]
    fn persona_name_stops_at_first_nul() {
        assert_eq!(decode_persona_name(b"Ada\0\0\0garbage"), "Ada");
        assert_eq!(decode_persona_name(b"unpadded"), "unpadded");
    }
}
