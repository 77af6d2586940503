//! Skill unlock tracking.
//!
//! A character can learn up to 16 skills, identified by index 0..16. The
//! unlocked subset travels on the wire as a 16-bit mask (bit i set iff
//! skill i is unlocked).

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Maximum number of skills a character class defines.
pub const MAX_SKILLS: usize = 16;

/// Set of unlocked skill indices, bit-packed into a `u16`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillSet(u16);

impl SkillSet {
    /// Empty set: nothing unlocked.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Build a set directly from a wire mask.
    pub const fn from_mask(mask: u16) -> Self {
        Self(mask)
    }

    /// Build a set from skill indices in any order.
    pub fn from_indices(indices: impl IntoIterator<Item = u8>) -> Result<Self, ModelError> {
        let mut set = Self::new();
        for index in indices {
            set.unlock(index)?;
        }
        Ok(set)
    }

    /// Wire mask.
    pub const fn mask(self) -> u16 {
        self.0
    }

    /// Mark a skill as unlocked.
    pub fn unlock(&mut self, index: u8) -> Result<(), ModelError> {
        if usize::from(index) >= MAX_SKILLS {
            return Err(ModelError::InvalidSkillIndex(index));
        }
        self.0 |= 1 << index;
        Ok(())
    }

    /// True when the skill at `index` is unlocked.
    pub fn is_unlocked(self, index: u8) -> bool {
        usize::from(index) < MAX_SKILLS && self.0 & (1 << index) != 0
    }

    /// Unlocked indices in ascending order.
    pub fn indices(self) -> Vec<u8> {
        (0..MAX_SKILLS as u8)
            .filter(|index| self.is_unlocked(*index))
            .collect()
    }

    /// Number of unlocked skills.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True when nothing is unlocked.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_and_query() {
        let mut skills = SkillSet::new();
        skills.unlock(0).unwrap();
        skills.unlock(15).unwrap();
        assert!(skills.is_unlocked(0));
        assert!(skills.is_unlocked(15));
        assert!(!skills.is_unlocked(7));
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut skills = SkillSet::new();
        assert_eq!(skills.unlock(16), Err(ModelError::InvalidSkillIndex(16)));
        assert!(!skills.is_unlocked(16));
    }

    #[test]
    fn indices_round_trip_through_mask() {
        let skills = SkillSet::from_indices([3, 1, 9]).unwrap();
        let rebuilt = SkillSet::from_mask(skills.mask());
        assert_eq!(rebuilt.indices(), vec![1, 3, 9]);
    }
}
