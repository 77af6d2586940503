//! Stage progression: the character's current maze level and the set of
//! completed levels.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Maximum number of maze levels trackable in the completion mask.
pub const MAX_LEVELS: usize = 64;

/// Set of completed level indices, bit-packed into a `u64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelMask(u64);

impl LevelMask {
    /// Empty mask: nothing completed.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Build from a wire mask.
    pub const fn from_mask(mask: u64) -> Self {
        Self(mask)
    }

    /// Wire mask.
    pub const fn mask(self) -> u64 {
        self.0
    }

    /// Mark a level as completed.
    pub fn complete(&mut self, level: u8) -> Result<(), ModelError> {
        if usize::from(level) >= MAX_LEVELS {
            return Err(ModelError::InvalidLevelIndex(level));
        }
        self.0 |= 1 << level;
        Ok(())
    }

    /// True when the level at `index` is completed.
    pub fn is_completed(self, level: u8) -> bool {
        usize::from(level) < MAX_LEVELS && self.0 & (1 << level) != 0
    }

    /// Number of completed levels.
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }
}

/// Where the character stands in the maze.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageProgress {
    /// Level the character is currently on.
    pub current_level: u16,
    /// Levels completed so far.
    pub completed: LevelMask,
}

impl StageProgress {
    /// Fresh progress: level 0, nothing completed.
    pub const fn new() -> Self {
        Self {
            current_level: 0,
            completed: LevelMask::new(),
        }
    }
}
