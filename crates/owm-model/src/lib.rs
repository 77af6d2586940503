//! Game data model for "Of Witches and Mazes" save records.
//!
//! This crate defines the closed catalogs the save codec serializes:
//! character classes, item kinds, alteration stats, skills, stage
//! progression, equipment, and the [`SaveRecord`] aggregate that ties them
//! together. Catalog types carry small-integer discriminants used as wire
//! tags; unknown discriminants map to `None` so callers can apply their own
//! fall-back policy.

pub mod alteration;
pub mod class;
pub mod equipment;
pub mod error;
pub mod item;
pub mod record;
pub mod skill;
pub mod stage;

pub use alteration::{ALTERATION_VALUE_SLOTS, AlterationKind, AlterationSet};
pub use class::CharacterClass;
pub use equipment::{EQUIPMENT_SLOT_COUNT, EquipmentSlot, EquipmentTable};
pub use error::{ModelError, Result};
pub use item::{INVENTORY_CAPACITY, Inventory, ItemEntry, ItemKind};
pub use record::SaveRecord;
pub use skill::{MAX_SKILLS, SkillSet};
pub use stage::{LevelMask, MAX_LEVELS, StageProgress};
