//! Save directory: one encoded `SaveData` per file.

use std::fs;
use std::path::{Path, PathBuf};

use super::codec::{read_record, write_record};
use super::error::PersistError;
use super::save::SaveData;

/// Extension of save files; anything else in the directory is ignored.
pub const SAVE_EXTENSION: &str = "dat";

/// A save found on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveEntry {
    pub path: PathBuf,
    pub data: SaveData,
}

/// Reads and writes named saves in a single directory.
#[derive(Clone, Debug)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `save` to a new file named after its timestamp.
    ///
    /// The directory is created on first use. Returns the file written.
    pub fn save(&self, save: &SaveData) -> Result<PathBuf, PersistError> {
        let path = self.unused_path(save.saved_at().timestamp_millis());
        write_record(&path, save)?;
        log::info!("saved \"{}\" to {}", save.label(), path.display());
        Ok(path)
    }

    /// Read and check a single save file.
    pub fn read(path: &Path) -> Result<SaveData, PersistError> {
        let save: SaveData = read_record(path)?;
        if !save.game().is_consistent() {
            return Err(PersistError::Inconsistent {
                path: path.to_path_buf(),
            });
        }
        Ok(save)
    }

    /// Every readable save, newest first.
    ///
    /// A missing directory means no saves. Files that cannot be read or do
    /// not hold a valid game are skipped.
    pub fn list(&self) -> Result<Vec<SaveEntry>, PersistError> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| PersistError::io(&self.dir, e))?;
        let mut saves = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    log::debug!("skipping unreadable entry in {}: {e}", self.dir.display());
                    continue;
                }
            };
            if !path.is_file() || path.extension().map_or(true, |ext| ext != SAVE_EXTENSION) {
                continue;
            }
            match Self::read(&path) {
                Ok(data) => saves.push(SaveEntry { path, data }),
                Err(e) => log::debug!("skipping save: {e}"),
            }
        }

        saves.sort_by(|a, b| b.data.saved_at().cmp(&a.data.saved_at()));
        Ok(saves)
    }

    fn unused_path(&self, millis: i64) -> PathBuf {
        let base = format!("save_{millis}");
        let mut path = self.dir.join(format!("{base}.{SAVE_EXTENSION}"));
        let mut n = 1;
        while path.exists() {
            path = self.dir.join(format!("{base}_{n}.{SAVE_EXTENSION}"));
            n += 1;
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Game, GameMode};
    use chrono::{Duration, Local};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("spider-engine-store-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_directory_lists_nothing() {
        let store = SaveStore::new(scratch_dir("missing"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_list_newest_first() {
        let dir = scratch_dir("order");
        let store = SaveStore::new(&dir);
        let game = Game::with_seed(GameMode::FourSuits, 12);
        let now = Local::now();

        let older = SaveData::with_timestamp(&game, "older", "", now - Duration::minutes(5));
        let newer = SaveData::with_timestamp(&game, "newer", "", now);
        store.save(&older).unwrap();
        let newer_path = store.save(&newer).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].data.label(), "newer");
        assert_eq!(listed[0].path, newer_path);
        assert_eq!(listed[1].data, older);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_same_timestamp_gets_distinct_files() {
        let dir = scratch_dir("collide");
        let store = SaveStore::new(&dir);
        let save = SaveData::new(&Game::with_seed(GameMode::SingleSuit, 3), "twice", "");

        let first = store.save(&save).unwrap();
        let second = store.save(&save).unwrap();

        assert_ne!(first, second);
        assert_eq!(store.list().unwrap().len(), 2);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_corrupt_files_are_skipped() {
        let dir = scratch_dir("corrupt");
        let store = SaveStore::new(&dir);
        store
            .save(&SaveData::new(&Game::with_seed(GameMode::TwoSuits, 8), "good", ""))
            .unwrap();

        fs::write(dir.join("save_1.dat"), b"garbage").unwrap();
        fs::write(dir.join("notes.txt"), b"not a save").unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].data.label(), "good");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_inconsistent_game_is_rejected() {
        let dir = scratch_dir("inconsistent");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("save_5.dat");

        // The dealt columns without stock: 54 of 104 cards.
        let partial = Game::from_layout(
            GameMode::SingleSuit,
            Game::with_seed(GameMode::SingleSuit, 5).columns().clone(),
            Vec::new(),
            Vec::new(),
        );
        write_record(&path, &SaveData::new(&partial, "bad", "")).unwrap();

        assert!(matches!(
            SaveStore::read(&path),
            Err(PersistError::Inconsistent { .. })
        ));
        assert!(SaveStore::new(&dir).list().unwrap().is_empty());

        fs::remove_dir_all(dir).unwrap();
    }
}
