//! Player configuration file.
//!
//! A small JSON document holding key bindings, volume levels, the window
//! mode, and a pointer to the most recent save. Loading a missing file
//! yields the defaults; saving writes a temporary file and renames it into
//! place so a crash mid-write never leaves a torn configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StoreError};

/// Window presentation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    #[default]
    Windowed,
    Fullscreen,
}

/// Player-facing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Action name to key name.
    pub key_bindings: BTreeMap<String, String>,
    /// Music volume, 0.0..=1.0.
    pub music_volume: f32,
    /// Sound effects volume, 0.0..=1.0.
    pub effects_volume: f32,
    /// Window presentation mode.
    pub window_mode: WindowMode,
    /// File name of the most recently used save, if any.
    pub last_save: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            key_bindings: default_key_bindings(),
            music_volume: 0.8,
            effects_volume: 0.8,
            window_mode: WindowMode::default(),
            last_save: None,
        }
    }
}

fn default_key_bindings() -> BTreeMap<String, String> {
    [
        ("move_up", "W"),
        ("move_down", "S"),
        ("move_left", "A"),
        ("move_right", "D"),
        ("attack", "J"),
        ("cast", "K"),
        ("interact", "E"),
        ("pause", "Escape"),
    ]
    .into_iter()
    .map(|(action, key)| (action.to_string(), key.to_string()))
    .collect()
}

impl Configuration {
    /// Load the configuration, returning defaults when the file is absent.
    ///
    /// Volumes are clamped into 0.0..=1.0 on the way in; a file that exists
    /// but does not parse is an error, not a silent reset.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no configuration file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let mut config: Configuration =
            serde_json::from_str(&contents).map_err(|source| StoreError::InvalidConfiguration {
                path: path.to_path_buf(),
                source,
            })?;
        config.music_volume = config.music_volume.clamp(0.0, 1.0);
        config.effects_volume = config.effects_volume.clamp(0.0, 1.0);
        Ok(config)
    }

    /// Write the configuration as pretty JSON, atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| {
            StoreError::InvalidConfiguration {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        debug!(path = %path.display(), "wrote configuration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_full_bindings() {
        let config = Configuration::default();
        assert_eq!(config.key_bindings.len(), 8);
        assert_eq!(config.key_bindings["pause"], "Escape");
        assert_eq!(config.window_mode, WindowMode::Windowed);
    }

    #[test]
    fn volumes_clamp_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"music_volume": 3.5, "effects_volume": -1.0}"#).unwrap();
        let config = Configuration::load(&path).unwrap();
        assert_eq!(config.music_volume, 1.0);
        assert_eq!(config.effects_volume, 0.0);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Configuration::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Configuration::load(&path),
            Err(StoreError::InvalidConfiguration { .. })
        ));
    }
}
