//! The save record aggregate.

use serde::{Deserialize, Serialize};

use crate::class::CharacterClass;
use crate::equipment::EquipmentTable;
use crate::item::Inventory;
use crate::skill::SkillSet;
use crate::stage::StageProgress;

/// Everything a character save file holds.
///
/// Timestamps are seconds since the Unix epoch, stored as `f64` to match
/// the on-disk representation. A record is rebuilt wholesale on every save;
/// there are no partial updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// When the character was created. Also the source of the save file
    /// name, so it never changes after creation.
    pub creation_date: f64,
    /// When the record was last written. Refreshed by [`SaveRecord::touch`].
    pub modification_date: f64,
    /// Maze progression.
    pub stage: StageProgress,
    /// Character name chosen by the player.
    pub persona_name: String,
    /// Character class. `None` only after decoding an unrecognized class
    /// discriminant; callers treat that as "start over".
    pub character_class: Option<CharacterClass>,
    /// Total experience points.
    pub experience: u64,
    /// Unlocked skills.
    pub skills: SkillSet,
    /// Equipped-item indices into the inventory.
    pub equipment: EquipmentTable,
    /// Item inventory.
    pub inventory: Inventory,
}

impl SaveRecord {
    /// Create a fresh record for a new character.
    pub fn new(persona_name: impl Into<String>, class: CharacterClass, now: f64) -> Self {
        Self {
            creation_date: now,
            modification_date: now,
            stage: StageProgress::new(),
            persona_name: persona_name.into(),
            character_class: Some(class),
            experience: 0,
            skills: SkillSet::new(),
            equipment: EquipmentTable::new(),
            inventory: Inventory::new(),
        }
    }

    /// Refresh the modification timestamp before a save.
    pub fn touch(&mut self, now: f64) {
        self.modification_date = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_starts_empty() {
        let record = SaveRecord::new("Morgana", CharacterClass::Wizard, 1_700_000_000.0);
        assert_eq!(record.creation_date, record.modification_date);
        assert_eq!(record.character_class, Some(CharacterClass::Wizard));
        assert_eq!(record.experience, 0);
        assert!(record.skills.is_empty());
        assert_eq!(record.inventory.occupied(), 0);
        assert_eq!(record.equipment.occupied(), 0);
    }

    #[test]
    fn touch_updates_modification_only() {
        let mut record = SaveRecord::new("Morgana", CharacterClass::Wizard, 100.0);
        record.touch(250.5);
        assert_eq!(record.creation_date, 100.0);
        assert_eq!(record.modification_date, 250.5);
    }

    #[test]
    fn record_serializes_to_json() {
        let record = SaveRecord::new("Morgana", CharacterClass::Wizard, 100.0);
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: SaveRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
