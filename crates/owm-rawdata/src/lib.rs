//! Fixed-layout binary codec for "Of Witches and Mazes" save files.
//!
//! A `.rawdata` save is a single buffer of [`TOTAL_LEN`] bytes partitioned
//! into ordered members with statically computed offsets (see [`layout`]).
//! Two magic byte sequences frame the buffer; decoding refuses any buffer
//! whose length or magic does not match exactly, while unrecognized
//! discriminants *inside* the frame degrade gracefully (empty inventory
//! slot, no character class).
//!
//! # Example
//!
//! ```
//! use owm_model::{CharacterClass, SaveRecord};
//! use owm_rawdata::{decode_record, encode_record, TOTAL_LEN};
//!
//! let mut record = SaveRecord::new("Morgana", CharacterClass::Wizard, 1_700_000_000.0);
//! record.skills.unlock(3).unwrap();
//!
//! let buffer = encode_record(&record);
//! assert_eq!(buffer.len(), TOTAL_LEN);
//!
//! let decoded = decode_record(&buffer).unwrap();
//! assert_eq!(decoded, record);
//! ```
//!
//! File I/O goes through [`read_rawdata`] and [`write_rawdata`], or the
//! [`RawDataReader`]/[`RawDataWriter`] types for non-file sources.

mod decode;
mod encode;
mod error;
pub mod layout;
pub mod validate;

pub use decode::{RawDataReader, decode_record, read_rawdata, validate_frame};
pub use encode::{RawDataWriter, encode_record, write_rawdata};
pub use error::{RawDataError, Result};
pub use layout::{ENDING, FORMAT_VERSION, Member, PERSONA_NAME_LEN, SIGNATURE, TOTAL_LEN};
pub use validate::{RawDataValidator, Severity, ValidationIssue, ValidationReport};
