//! Save record encoder.
//!
//! Encoding is a pure buffer transform: any in-model record produces
//! exactly [`TOTAL_LEN`](crate::layout::TOTAL_LEN) bytes, however many
//! skills, inventory slots, or alterations are populated. Absent inventory
//! slots stay zero-filled; absent equipment slots carry
//! [`EMPTY_EQUIPMENT_SLOT`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use owm_model::{ItemEntry, SaveRecord};

use crate::error::Result;
use crate::layout::{
    EMPTY_EQUIPMENT_SLOT, ENDING, FORMAT_VERSION, ITEM_ENTRY_LEN, Member, PERSONA_NAME_LEN,
    SIGNATURE, TOTAL_LEN,
};

/// Save file writer over any [`Write`] sink.
pub struct RawDataWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> RawDataWriter<W> {
    /// Create a new writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Encode and write a record, consuming the writer.
    pub fn write_record(mut self, record: &SaveRecord) -> Result<()> {
        let buffer = encode_record(record);
        self.writer.write_all(&buffer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl RawDataWriter<File> {
    /// Create a save file for writing.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

/// Write a record to a save file.
pub fn write_rawdata(path: &Path, record: &SaveRecord) -> Result<()> {
    RawDataWriter::create(path)?.write_record(record)
}

/// Encode a record into a fresh buffer of exactly `TOTAL_LEN` bytes.
#[must_use]
pub fn encode_record(record: &SaveRecord) -> Vec<u8> {
    let mut buffer = vec![0u8; TOTAL_LEN];

    buffer[Member::Signature.range()].copy_from_slice(&SIGNATURE);
    buffer[Member::Version.range()].copy_from_slice(&FORMAT_VERSION.to_le_bytes());
    buffer[Member::CreationDate.range()].copy_from_slice(&record.creation_date.to_le_bytes());
    buffer[Member::ModificationDate.range()]
        .copy_from_slice(&record.modification_date.to_le_bytes());

    encode_stage(&mut buffer, record);

    encode_persona_name(&mut buffer[Member::PersonaName.range()], &record.persona_name);

    buffer[Member::CharacterClass.offset()] = record
        .character_class
        .map_or(0, owm_model::CharacterClass::discriminant);
    buffer[Member::Experience.range()].copy_from_slice(&record.experience.to_le_bytes());
    buffer[Member::UnlockedSkills.range()].copy_from_slice(&record.skills.mask().to_le_bytes());

    encode_equipment(&mut buffer[Member::EquippedItems.range()], record);
    encode_inventory(&mut buffer[Member::Inventory.range()], record);

    buffer[Member::Ending.range()].copy_from_slice(&ENDING);
    buffer
}

fn encode_stage(buffer: &mut [u8], record: &SaveRecord) {
    let offset = Member::StageInfo.offset();
    buffer[offset..offset + 2].copy_from_slice(&record.stage.current_level.to_le_bytes());
    buffer[offset + 2..offset + 10].copy_from_slice(&record.stage.completed.mask().to_le_bytes());
}

/// Write a name as zero-padded UTF-8, truncating on a character boundary
/// when it exceeds the member capacity.
fn encode_persona_name(field: &mut [u8], name: &str) {
    let mut end = name.len().min(PERSONA_NAME_LEN);
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    field[..end].copy_from_slice(&name.as_bytes()[..end]);
}

fn encode_equipment(field: &mut [u8], record: &SaveRecord) {
    for (slot, index) in record.equipment.iter() {
        field[slot.index()] = index.unwrap_or(EMPTY_EQUIPMENT_SLOT);
    }
}

fn encode_inventory(field: &mut [u8], record: &SaveRecord) {
    for (slot, entry) in record.inventory.iter().enumerate() {
        let start = slot * ITEM_ENTRY_LEN;
        if let Some(entry) = entry {
            encode_item_entry(&mut field[start..start + ITEM_ENTRY_LEN], entry);
        }
        // Empty slots keep their zero fill; kind discriminant 0 marks them.
    }
}

fn encode_item_entry(field: &mut [u8], entry: &ItemEntry) {
    field[0..2].copy_from_slice(&entry.kind.discriminant().to_le_bytes());
    field[2] = entry.level;
    field[3] = entry.stack;
    field[4..8].copy_from_slice(&entry.alterations.mask().to_le_bytes());
    let mut pos = 8;
    for value in entry.alterations.packed_values() {
        field[pos..pos + 8].copy_from_slice(&value.to_le_bytes());
        pos += 8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use owm_model::CharacterClass;

    #[test]
    fn encoded_buffer_has_fixed_length() {
        let record = SaveRecord::new("Morgana", CharacterClass::Wizard, 1_000.0);
        assert_eq!(encode_record(&record).len(), TOTAL_LEN);
    }

    #[test]
    fn magic_bytes_are_placed() {
        let record = SaveRecord::new("Morgana", CharacterClass::Wizard, 1_000.0);
        let buffer = encode_record(&record);
        assert_eq!(&buffer[Member::Signature.range()], SIGNATURE.as_slice());
        assert_eq!(&buffer[Member::Ending.range()], ENDING.as_slice());
    }

    #[test]
    fn persona_name_truncates_on_char_boundary() {
        let mut field = [0u8; PERSONA_NAME_LEN];
        // "a" plus eight 3-byte characters is 25 bytes; byte 24 falls
        // mid-character, so the cut backs off to byte 22.
        let name = format!("a{}", "\u{611b}".repeat(8));
        encode_persona_name(&mut field, &name);
        let kept = format!("a{}", "\u{611b}".repeat(7));
        assert_eq!(&field[..22], kept.as_bytes());
        assert!(field[22..].iter().all(|&b| b == 0));
    }

    #[test]
    fn missing_class_encodes_as_zero() {
        let mut record = SaveRecord::new("Morgana", CharacterClass::Wizard, 1_000.0);
        record.character_class = None;
        let buffer = encode_record(&record);
        assert_eq!(buffer[Member::CharacterClass.offset()], 0);
    }
}
