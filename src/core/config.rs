//! Engine configuration.
//!
//! The embedding application configures the engine at startup by providing
//! an `EngineConfig`:
//! - where the statistics file lives
//! - which directory holds named saves
//! - how many undo steps are kept
//! - which mode a fresh session starts in
//!
//! Paths are relative to the working directory unless made absolute.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::game::GameMode;

/// Default statistics file name.
pub const DEFAULT_STATS_FILE: &str = "stats.dat";

/// Default directory for named saves.
pub const DEFAULT_SAVE_DIR: &str = "saves";

/// Default number of undo snapshots kept per session.
pub const DEFAULT_MAX_UNDO: usize = 50;

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Statistics file path.
    pub stats_path: PathBuf,

    /// Directory holding one file per named save.
    pub save_dir: PathBuf,

    /// Undo snapshots kept; the oldest is discarded beyond this.
    pub max_undo: usize,

    /// Mode of the first game in a session.
    pub default_mode: GameMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stats_path: PathBuf::from(DEFAULT_STATS_FILE),
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            max_undo: DEFAULT_MAX_UNDO,
            default_mode: GameMode::SingleSuit,
        }
    }
}

impl EngineConfig {
    /// Default layout placed under `root` instead of the working directory.
    #[must_use]
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            stats_path: root.join(DEFAULT_STATS_FILE),
            save_dir: root.join(DEFAULT_SAVE_DIR),
            ..Self::default()
        }
    }

    /// Set the statistics file path.
    #[must_use]
    pub fn with_stats_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stats_path = path.into();
        self
    }

    /// Set the save directory.
    #[must_use]
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    /// Set the undo depth.
    #[must_use]
    pub fn with_max_undo(mut self, steps: usize) -> Self {
        self.max_undo = steps;
        self
    }

    /// Set the starting mode.
    #[must_use]
    pub fn with_default_mode(mut self, mode: GameMode) -> Self {
        self.default_mode = mode;
        self
    }
}
