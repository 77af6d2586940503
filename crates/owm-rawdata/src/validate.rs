//! Issue-collecting save file validation.
//!
//! Unlike [`decode_record`](crate::decode::decode_record), which stops at
//! the first frame violation, the validator walks the whole buffer and
//! collects everything it finds, so a damaged save can be diagnosed in one
//! pass.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use owm_rawdata::validate::RawDataValidator;
//!
//! let report = RawDataValidator::validate_file(Path::new("1700000000000.rawdata")).unwrap();
//! println!("valid: {}", report.is_valid());
//! for issue in report.issues() {
//!     println!("{}: [{}] {}", issue.severity, issue.section, issue.message);
//! }
//! ```

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use owm_model::{
    ALTERATION_VALUE_SLOTS, CharacterClass, EquipmentSlot, INVENTORY_CAPACITY, ItemKind,
};

use crate::error::{RawDataError, Result};
use crate::layout::{ENDING, FORMAT_VERSION, ITEM_ENTRY_LEN, Member, SIGNATURE, TOTAL_LEN};

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Suspicious but decodable; decoding applies a lenient fallback.
    Warning,
    /// Violates the save format; decoding would refuse the file.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A single finding within a save buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Member or region the issue belongs to.
    pub section: String,
    pub message: String,
}

/// Collected findings for one buffer.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True when no error-severity issues were found.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// Number of error-severity issues.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
            .count()
    }

    /// Number of warning-severity issues.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
            .count()
    }

    /// All issues in discovery order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    fn push(&mut self, severity: Severity, section: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            severity,
            section: section.into(),
            message: message.into(),
        });
    }
}

/// Save buffer validator.
pub struct RawDataValidator;

impl RawDataValidator {
    /// Validate a file on disk.
    pub fn validate_file(path: &Path) -> Result<ValidationReport> {
        let mut file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RawDataError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                RawDataError::Io(e)
            }
        })?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(Self::validate_bytes(&data))
    }

    /// Validate an in-memory buffer.
    pub fn validate_bytes(data: &[u8]) -> ValidationReport {
        let mut report = ValidationReport::default();

        if data.len() != TOTAL_LEN {
            report.push(
                Severity::Error,
                "frame",
                format!("wrong length: expected {TOTAL_LEN} bytes, got {}", data.len()),
            );
            // Member offsets are meaningless at the wrong length.
            return report;
        }

        if data[Member::Signature.range()] != SIGNATURE {
            report.push(Severity::Error, Member::Signature.as_str(), "bad signature");
        }
        if data[Member::Ending.range()] != ENDING {
            report.push(Severity::Error, Member::Ending.as_str(), "bad ending marker");
        }

        check_version(data, &mut report);
        check_persona_name(data, &mut report);
        check_class(data, &mut report);
        check_equipment(data, &mut report);
        check_inventory(data, &mut report);

        report
    }
}

fn check_version(data: &[u8], report: &mut ValidationReport) {
    let range = Member::Version.range();
    let version = u16::from_le_bytes([data[range.start], data[range.start + 1]]);
    if version != FORMAT_VERSION {
        report.push(
            Severity::Warning,
            Member::Version.as_str(),
            format!("version {version} differs from current {FORMAT_VERSION}; decoding does not branch on it"),
        );
    }
}

fn check_persona_name(data: &[u8], report: &mut ValidationReport) {
    let field = &data[Member::PersonaName.range()];
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    if std::str::from_utf8(&field[..end]).is_err() {
        report.push(
            Severity::Warning,
            Member::PersonaName.as_str(),
            "name bytes are not valid UTF-8; decoding is lossy",
        );
    }
}

fn check_class(data: &[u8], report: &mut ValidationReport) {
    let discriminant = data[Member::CharacterClass.offset()];
    if CharacterClass::from_discriminant(discriminant).is_none() {
        report.push(
            Severity::Warning,
            Member::CharacterClass.as_str(),
            format!("unknown class discriminant {discriminant}; decodes as none"),
        );
    }
}

fn check_equipment(data: &[u8], report: &mut ValidationReport) {
    let field = &data[Member::EquippedItems.range()];
    for slot in EquipmentSlot::ALL {
        let raw = field[slot.index()];
        if raw != crate::layout::EMPTY_EQUIPMENT_SLOT && (raw as usize) >= INVENTORY_CAPACITY {
            report.push(
                Severity::Warning,
                Member::EquippedItems.as_str(),
                format!("{slot} index {raw} is outside the inventory; decodes as empty"),
            );
        }
    }
}

fn check_inventory(data: &[u8], report: &mut ValidationReport) {
    let field = &data[Member::Inventory.range()];
    for slot in 0..INVENTORY_CAPACITY {
        let start = slot * ITEM_ENTRY_LEN;
        let discriminant = u16::from_le_bytes([field[start], field[start + 1]]);
        if discriminant != 0 && ItemKind::from_discriminant(discriminant).is_none() {
            report.push(
                Severity::Warning,
                Member::Inventory.as_str(),
                format!("slot {slot}: unknown item discriminant {discriminant}; decodes as empty"),
            );
            continue;
        }
        let mask = u32::from_le_bytes([
            field[start + 4],
            field[start + 5],
            field[start + 6],
            field[start + 7],
        ]);
        let populated = mask.count_ones() as usize;
        if populated > ALTERATION_VALUE_SLOTS {
            report.push(
                Severity::Warning,
                Member::Inventory.as_str(),
                format!(
                    "slot {slot}: alteration mask names {populated} stats but only {ALTERATION_VALUE_SLOTS} value slots exist"
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_record;
    use owm_model::SaveRecord;

    fn sample_buffer() -> Vec<u8> {
        encode_record(&SaveRecord::new(
            "Morgana",
            CharacterClass::Wizard,
            1_000.0,
        ))
    }

    #[test]
    fn clean_buffer_reports_no_issues() {
        let report = RawDataValidator::validate_bytes(&sample_buffer());
        assert!(report.is_valid());
        assert_eq!(report.warning_count(), 0);
        assert!(report.issues().is_empty());
    }

    #[test]
    fn wrong_length_short_circuits() {
        let report = RawDataValidator::validate_bytes(&[0u8; 10]);
        assert!(!report.is_valid());
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn damaged_magic_is_an_error_per_marker() {
        let mut buffer = sample_buffer();
        buffer[0] ^= 0xFF;
        let last = buffer.len() - 1;
        buffer[last] ^= 0xFF;
        let report = RawDataValidator::validate_bytes(&buffer);
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn version_mismatch_is_a_warning() {
        let mut buffer = sample_buffer();
        let range = Member::Version.range();
        buffer[range].copy_from_slice(&99u16.to_le_bytes());
        let report = RawDataValidator::validate_bytes(&buffer);
        assert!(report.is_valid());
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn unknown_item_discriminant_is_a_warning() {
        let mut buffer = sample_buffer();
        let start = Member::Inventory.offset() + 3 * ITEM_ENTRY_LEN;
        buffer[start..start + 2].copy_from_slice(&0x7777u16.to_le_bytes());
        let report = RawDataValidator::validate_bytes(&buffer);
        assert!(report.is_valid());
        assert_eq!(report.warning_count(), 1);
        assert!(report.issues()[0].message.contains("slot 3"));
    }
}
