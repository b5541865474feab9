//! Lifetime play statistics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::game::{Game, GameMode};

/// Records kept separately for each mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeRecord {
    pub best_score: u32,

    /// Seconds taken by the quickest win. `None` until the first win.
    pub fastest_seconds: Option<u64>,

    pub wins: u32,
}

/// Aggregate counters across every game played.
///
/// Counters only grow. Unlocked achievements map an achievement id to the
/// Unix time (milliseconds) it was first earned, and are never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    games_played: u32,
    total_wins: u32,
    total_moves: u64,
    total_sequences: u32,
    modes: FxHashMap<GameMode, ModeRecord>,
    unlocked: FxHashMap<String, i64>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    // === Counters ===

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn increment_games_played(&mut self) {
        self.games_played = self.games_played.saturating_add(1);
    }

    #[must_use]
    pub fn total_wins(&self) -> u32 {
        self.total_wins
    }

    pub fn increment_wins(&mut self) {
        self.total_wins = self.total_wins.saturating_add(1);
    }

    #[must_use]
    pub fn total_moves(&self) -> u64 {
        self.total_moves
    }

    pub fn add_moves(&mut self, moves: u64) {
        self.total_moves = self.total_moves.saturating_add(moves);
    }

    #[must_use]
    pub fn total_sequences(&self) -> u32 {
        self.total_sequences
    }

    pub fn add_sequences(&mut self, count: u32) {
        self.total_sequences = self.total_sequences.saturating_add(count);
    }

    // === Per-mode records ===

    /// Record for `mode`; zeroed if nothing was played in it.
    #[must_use]
    pub fn mode_record(&self, mode: GameMode) -> ModeRecord {
        self.modes.get(&mode).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn best_score(&self, mode: GameMode) -> u32 {
        self.mode_record(mode).best_score
    }

    /// Keep `score` if it beats the best for `mode`.
    pub fn update_best_score(&mut self, mode: GameMode, score: u32) {
        let record = self.modes.entry(mode).or_default();
        record.best_score = record.best_score.max(score);
    }

    #[must_use]
    pub fn fastest_seconds(&self, mode: GameMode) -> Option<u64> {
        self.mode_record(mode).fastest_seconds
    }

    /// Keep `seconds` if it is the quickest win in `mode` so far.
    pub fn update_fastest_time(&mut self, mode: GameMode, seconds: u64) {
        let record = self.modes.entry(mode).or_default();
        let fastest = record.fastest_seconds.map_or(seconds, |best| best.min(seconds));
        record.fastest_seconds = Some(fastest);
    }

    #[must_use]
    pub fn wins_in(&self, mode: GameMode) -> u32 {
        self.mode_record(mode).wins
    }

    pub fn increment_wins_in(&mut self, mode: GameMode) {
        let record = self.modes.entry(mode).or_default();
        record.wins = record.wins.saturating_add(1);
    }

    /// Apply a finished game: total and per-mode wins, best score, fastest
    /// time.
    pub fn record_win(&mut self, game: &Game) {
        let mode = game.mode();
        self.increment_wins();
        self.increment_wins_in(mode);
        self.update_best_score(mode, game.score());
        self.update_fastest_time(mode, game.elapsed_seconds());
    }

    // === Achievements ===

    #[must_use]
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains_key(id)
    }

    /// When `id` was unlocked, in Unix milliseconds.
    #[must_use]
    pub fn unlocked_at(&self, id: &str) -> Option<i64> {
        self.unlocked.get(id).copied()
    }

    /// Unlocked ids with their timestamps, in no particular order.
    pub fn unlocked(&self) -> impl Iterator<Item = (&str, i64)> {
        self.unlocked.iter().map(|(id, &at)| (id.as_str(), at))
    }

    /// Mark `id` unlocked at `at_millis`. The first unlock time is kept;
    /// returns whether this call unlocked it.
    pub fn unlock_achievement(&mut self, id: &str, at_millis: i64) -> bool {
        if self.unlocked.contains_key(id) {
            return false;
        }
        self.unlocked.insert(id.to_owned(), at_millis);
        true
    }
}
