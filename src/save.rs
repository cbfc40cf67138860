//! Player position save/load
//!
//! Persists the character's position to `player.save.json` under the local
//! data directory. A missing file is reported as [`SaveError::NotFound`] so
//! the caller decides how to fall back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

const SAVE_FILE: &str = "player.save.json";

/// Errors from reading or writing the player save
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no save file at {}", .0.display())]
    NotFound(PathBuf),

    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("save data could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Saved player state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSaveData {
    /// Player position [x, y, z]
    pub position: [f32; 3],
    /// When the save was written
    pub saved_at: DateTime<Utc>,
}

impl PlayerSaveData {
    /// Snapshot a position, stamped with the current time
    pub fn new(position: Vec3) -> Self {
        Self {
            position: position.to_array(),
            saved_at: Utc::now(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Default save directory, `<data_local_dir>/stride`
pub fn default_save_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stride")
}

/// Write the player's position into `dir`, creating it if needed
pub fn save_player(dir: &Path, position: Vec3) -> Result<PathBuf, SaveError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(SAVE_FILE);

    let json = serde_json::to_string_pretty(&PlayerSaveData::new(position))?;
    fs::write(&path, json)?;
    info!("Saved player to {:?}", path);
    Ok(path)
}

/// Read the player save from `dir`
pub fn load_player(dir: &Path) -> Result<PlayerSaveData, SaveError> {
    let path = dir.join(SAVE_FILE);
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(SaveError::NotFound(path)),
        Err(e) => return Err(e.into()),
    };
    let data = serde_json::from_str(&json)?;
    info!("Loaded player from {:?}", path);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("stride-save-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_save_and_load() {
        let dir = temp_dir();
        let path = save_player(&dir, Vec3::new(10.0, 5.0, -3.0)).unwrap();
        assert!(path.exists());

        let loaded = load_player(&dir).unwrap();
        assert_eq!(loaded.position, [10.0, 5.0, -3.0]);
        assert_eq!(loaded.position(), Vec3::new(10.0, 5.0, -3.0));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_save_is_not_found() {
        let dir = temp_dir();
        match load_player(&dir) {
            Err(SaveError::NotFound(path)) => assert_eq!(path, dir.join(SAVE_FILE)),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_save_is_serialization_error() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SAVE_FILE), "{ not json").unwrap();

        assert!(matches!(load_player(&dir), Err(SaveError::Serialization(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_file_layout() {
        let data = PlayerSaveData::new(Vec3::new(1.0, 2.0, 3.0));
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["position"], serde_json::json!([1.0, 2.0, 3.0]));
        assert!(json["saved_at"].is_string());
    }

    #[test]
    fn test_overwrite_keeps_latest() {
        let dir = temp_dir();
        save_player(&dir, Vec3::ZERO).unwrap();
        save_player(&dir, Vec3::new(4.0, 0.0, 4.0)).unwrap();

        assert_eq!(load_player(&dir).unwrap().position, [4.0, 0.0, 4.0]);

        fs::remove_dir_all(&dir).unwrap();
    }
}
