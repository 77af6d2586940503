//! Character class catalog.
//!
//! Each class owns a one-byte discriminant used as its wire tag. The
//! discriminant `0` is reserved and never assigned, so a zero-filled byte
//! on disk reads back as "no class".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Playable character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Fighter,
    Rogue,
    Wizard,
    Cleric,
    Ranger,
}

impl CharacterClass {
    /// All classes in discriminant order.
    pub const ALL: [CharacterClass; 5] = [
        CharacterClass::Fighter,
        CharacterClass::Rogue,
        CharacterClass::Wizard,
        CharacterClass::Cleric,
        CharacterClass::Ranger,
    ];

    /// One-byte wire discriminant. Never zero.
    pub const fn discriminant(self) -> u8 {
        match self {
            CharacterClass::Fighter => 1,
            CharacterClass::Rogue => 2,
            CharacterClass::Wizard => 3,
            CharacterClass::Cleric => 4,
            CharacterClass::Ranger => 5,
        }
    }

    /// Look up a class by wire discriminant.
    ///
    /// Returns `None` for unrecognized values, including the reserved `0`.
    pub fn from_discriminant(value: u8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.discriminant() == value)
    }

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            CharacterClass::Fighter => "Fighter",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Wizard => "Wizard",
            CharacterClass::Cleric => "Cleric",
            CharacterClass::Ranger => "Ranger",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = ModelError;

    /// Parse a class name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|class| class.as_str().to_lowercase() == normalized)
            .ok_or_else(|| ModelError::UnknownClassName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_are_unique_and_nonzero() {
        let mut seen = std::collections::HashSet::new();
        for class in CharacterClass::ALL {
            let d = class.discriminant();
            assert_ne!(d, 0);
            assert!(seen.insert(d), "duplicate discriminant {d}");
        }
    }

    #[test]
    fn discriminant_round_trip() {
        for class in CharacterClass::ALL {
            assert_eq!(
                CharacterClass::from_discriminant(class.discriminant()),
                Some(class)
            );
        }
        assert_eq!(CharacterClass::from_discriminant(0), None);
        assert_eq!(CharacterClass::from_discriminant(200), None);
    }

    #[test]
    fn parse_class_name() {
        assert_eq!("wizard".parse::<CharacterClass>(), Ok(CharacterClass::Wizard));
        assert_eq!(" Cleric ".parse::<CharacterClass>(), Ok(CharacterClass::Cleric));
        assert!("bard".parse::<CharacterClass>().is_err());
    }
}
