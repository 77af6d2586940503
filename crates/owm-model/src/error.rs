//! Error types for model construction.

use thiserror::Error;

/// Errors raised when building model values outside their valid domains.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Skill index outside the 0..16 range.
    #[error("skill index {0} out of range (max {max})", max = crate::skill::MAX_SKILLS - 1)]
    InvalidSkillIndex(u8),

    /// Level index outside the 0..64 range.
    #[error("level index {0} out of range (max {max})", max = crate::stage::MAX_LEVELS - 1)]
    InvalidLevelIndex(u8),

    /// More alterations than the fixed value array can hold.
    #[error("too many alterations: {count} exceeds capacity {capacity}")]
    TooManyAlterations { count: usize, capacity: usize },

    /// Inventory slot index outside the fixed capacity.
    #[error("inventory slot {index} out of range (capacity {capacity})")]
    SlotOutOfRange { index: usize, capacity: usize },

    /// Character class name not in the catalog.
    #[error("unknown character class: {0}")]
    UnknownClassName(String),
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
