//! Save file management.
//!
//! One `.rawdata` file per character, named from the creation timestamp in
//! whole milliseconds, so file names sort chronologically and never change
//! over a character's life. The store is an explicitly constructed value;
//! callers inject it where needed and serialize access externally. Every
//! save rewrites the full buffer.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use owm_model::{CharacterClass, SaveRecord};
use owm_rawdata::{read_rawdata, write_rawdata};

use crate::error::{Result, StoreError};

/// File extension for save files.
pub const SAVE_EXTENSION: &str = "rawdata";

/// Summary of one save file, as produced by [`SaveStore::list`].
///
/// Files that fail to decode still appear, with `record` fields absent, so
/// a listing never aborts on one damaged save.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveSummary {
    /// File name within the store root.
    pub file_name: String,
    /// Persona name, when the file decoded.
    pub persona_name: Option<String>,
    /// Character class, when the file decoded and the class was known.
    pub character_class: Option<CharacterClass>,
    /// Current maze level, when the file decoded.
    pub current_level: Option<u16>,
    /// Modification timestamp (seconds since epoch), when the file decoded.
    pub modified_at: Option<f64>,
}

impl SaveSummary {
    /// True when the underlying file decoded successfully.
    pub fn is_valid(&self) -> bool {
        self.persona_name.is_some()
    }
}

/// Directory-backed save file store.
#[derive(Debug, Clone)]
pub struct SaveStore {
    root: PathBuf,
}

impl SaveStore {
    /// Create a store over `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a save file within the store.
    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Write a brand-new record, returning its file name.
    ///
    /// The name derives from the record's creation timestamp; creating two
    /// characters in the same millisecond is not supported.
    pub fn create(&self, record: &SaveRecord) -> Result<String> {
        let file_name = file_name_for(record);
        fs::create_dir_all(&self.root)?;
        let path = self.path_of(&file_name);
        write_rawdata(&path, record)?;
        debug!(file = %file_name, persona = %record.persona_name, "created save");
        Ok(file_name)
    }

    /// Refresh the modification timestamp and rewrite the whole buffer.
    pub fn save(&self, file_name: &str, record: &mut SaveRecord, now: f64) -> Result<()> {
        check_file_name(file_name)?;
        record.touch(now);
        fs::create_dir_all(&self.root)?;
        write_rawdata(&self.path_of(file_name), record)?;
        debug!(file = %file_name, "saved");
        Ok(())
    }

    /// Load and decode a save file.
    ///
    /// Frame violations surface as codec errors; the caller decides whether
    /// to fall back to a fresh record.
    pub fn load(&self, file_name: &str) -> Result<SaveRecord> {
        check_file_name(file_name)?;
        let record = read_rawdata(&self.path_of(file_name))?;
        debug!(file = %file_name, persona = %record.persona_name, "loaded save");
        Ok(record)
    }

    /// Delete a save file.
    pub fn delete(&self, file_name: &str) -> Result<()> {
        check_file_name(file_name)?;
        fs::remove_file(self.path_of(file_name))?;
        debug!(file = %file_name, "deleted save");
        Ok(())
    }

    /// Summarize every `.rawdata` file under the root.
    ///
    /// A missing root directory lists as empty. Files that fail to decode
    /// are reported as invalid entries rather than aborting the listing.
    pub fn list(&self) -> Result<Vec<SaveSummary>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut summaries = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SAVE_EXTENSION) {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            summaries.push(summarize(&path, file_name));
        }
        summaries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(summaries)
    }
}

/// Derive the save file name from the creation timestamp.
pub fn file_name_for(record: &SaveRecord) -> String {
    let millis = (record.creation_date * 1_000.0).max(0.0) as u64;
    format!("{millis}.{SAVE_EXTENSION}")
}

fn check_file_name(file_name: &str) -> Result<()> {
    let valid = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        == Some(SAVE_EXTENSION)
        && Path::new(file_name).components().count() == 1;
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidFileName {
            name: file_name.to_string(),
        })
    }
}

fn summarize(path: &Path, file_name: &str) -> SaveSummary {
    match read_rawdata(path) {
        Ok(record) => SaveSummary {
            file_name: file_name.to_string(),
            persona_name: Some(record.persona_name),
            character_class: record.character_class,
            current_level: Some(record.stage.current_level),
            modified_at: Some(record.modification_date),
        },
        Err(e) => {
            warn!(file = %file_name, error = %e, "save file failed to decode");
            SaveSummary {
                file_name: file_name.to_string(),
                persona_name: None,
                character_class: None,
                current_level: None,
                modified_at: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_derives_from_creation_millis() {
        let record = SaveRecord::new("Ada", CharacterClass::Rogue, 1_690_000_000.5);
        assert_eq!(file_name_for(&record), "1690000000500.rawdata");
    }

    #[test]
    fn foreign_file_names_are_rejected() {
        assert!(check_file_name("1690000000500.rawdata").is_ok());
        assert!(check_file_name("notes.txt").is_err());
        assert!(check_file_name("../escape.rawdata").is_err());
    }
}
