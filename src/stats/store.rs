//! The statistics file and the recording points around it.

use std::path::{Path, PathBuf};

use chrono::Utc;

use super::achievement::unlock_newly_met;
use super::statistics::Statistics;
use crate::game::Game;
use crate::persist::{read_record, write_record, PersistError};

/// Statistics bound to the file they are kept in.
///
/// One store is created per session and passed where it is needed. A
/// missing or damaged file never stops play: loading falls back to fresh
/// statistics, and failed writes are kept for the caller to report.
#[derive(Debug)]
pub struct StatsStore {
    path: PathBuf,
    stats: Statistics,
    last_error: Option<PersistError>,
}

impl StatsStore {
    /// Read statistics from `path`.
    ///
    /// An absent file gives fresh statistics. So does an unreadable one,
    /// after a warning; it is overwritten on the next save.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stats = if path.exists() {
            match read_record(&path) {
                Ok(stats) => stats,
                Err(e) => {
                    log::warn!("starting with fresh statistics: {e}");
                    Statistics::default()
                }
            }
        } else {
            Statistics::default()
        };
        Self::with_stats(path, stats)
    }

    /// Wrap existing statistics without touching the file.
    #[must_use]
    pub fn with_stats(path: impl Into<PathBuf>, stats: Statistics) -> Self {
        Self {
            path: path.into(),
            stats,
            last_error: None,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut Statistics {
        &mut self.stats
    }

    /// Write the statistics file.
    pub fn save(&self) -> Result<(), PersistError> {
        write_record(&self.path, &self.stats)
    }

    /// Save, keeping any failure for [`StatsStore::take_error`].
    fn persist(&mut self) {
        if let Err(e) = self.save() {
            log::warn!("statistics not saved: {e}");
            self.last_error = Some(e);
        }
    }

    /// The most recent failed write, if any, clearing it.
    pub fn take_error(&mut self) -> Option<PersistError> {
        self.last_error.take()
    }

    // === Recording ===

    /// A game was started. Saved at once.
    pub fn record_game_started(&mut self) {
        self.stats.increment_games_played();
        self.persist();
    }

    /// A move was made. Saved at once.
    pub fn record_move(&mut self) {
        self.stats.add_moves(1);
        self.persist();
    }

    /// Runs completed by the last action. Saved with the next write.
    pub fn record_sequences(&mut self, count: u32) {
        self.stats.add_sequences(count);
    }

    /// `game` was just won. Saved with the next write.
    pub fn record_win(&mut self, game: &Game) {
        self.stats.record_win(game);
        log::info!(
            "{} game won: score {}, {} moves, {}s",
            game.mode(),
            game.score(),
            game.moves(),
            game.elapsed_seconds()
        );
    }

    /// Unlock achievements that now hold and return their names.
    ///
    /// The statistics are saved once if anything was unlocked.
    pub fn check_achievements(&mut self, game: Option<&Game>) -> Vec<&'static str> {
        let now = Utc::now().timestamp_millis();
        let names: Vec<&'static str> = unlock_newly_met(&mut self.stats, game, now)
            .into_iter()
            .map(|a| a.name)
            .collect();

        if !names.is_empty() {
            log::info!("achievements unlocked: {}", names.join(", "));
            self.persist();
        }
        names
    }

    /// Save after changes recorded without a write of their own.
    pub fn flush(&mut self) {
        self.persist();
    }
}
