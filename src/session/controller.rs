//! One play session: the current game, its undo history, statistics and
//! saves.

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::core::{Action, EngineConfig};
use crate::game::{Game, GameMode};
use crate::persist::{PersistError, SaveData, SaveEntry, SaveStore};
use crate::rules::RulesEngine;
use crate::stats::{Statistics, StatsStore};

/// What an accepted action led to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    /// Runs completed by this action.
    pub completed_sequences: usize,
    /// The action won the game.
    pub won: bool,
    /// Names of achievements unlocked by this action.
    pub unlocked: Vec<&'static str>,
}

/// Drives a game on behalf of a front end.
///
/// Every accepted action is undoable; the oldest snapshot is dropped once
/// `max_undo` are kept. Statistics are recorded as play happens. A failed
/// statistics write is logged and kept in [`Session::last_persist_error`];
/// play is never interrupted by it.
///
/// ## Example
///
/// ```no_run
/// use spider_engine::{EngineConfig, GameMode, Session};
///
/// let mut session = Session::new(EngineConfig::default());
/// session.start_new_game(GameMode::TwoSuits);
/// if let Some(report) = session.deal() {
///     println!("{} runs completed", report.completed_sequences);
/// }
/// session.undo();
/// ```
#[derive(Debug)]
pub struct Session {
    config: EngineConfig,
    game: Game,
    undo: VecDeque<Game>,
    stats: StatsStore,
    saves: SaveStore,
    last_persist_error: Option<PersistError>,
}

impl Session {
    /// Load statistics and deal a game in the configured default mode.
    ///
    /// The opening deal is not counted as a game played; only games the
    /// player starts are.
    pub fn new(config: EngineConfig) -> Self {
        let stats = StatsStore::load(&config.stats_path);
        let saves = SaveStore::new(&config.save_dir);
        let game = Game::new(config.default_mode);
        log::info!("opening {} game, seed {}", game.mode(), game.seed());
        Self {
            config,
            game,
            undo: VecDeque::new(),
            stats,
            saves,
            last_persist_error: None,
        }
    }

    // === Game lifecycle ===

    /// Deal a fresh game in `mode`. Counts as a game played.
    pub fn start_new_game(&mut self, mode: GameMode) {
        self.game.new_game(mode);
        self.begin_game();
    }

    /// Deal a reproducible game in `mode`. Counts as a game played.
    pub fn start_seeded_game(&mut self, mode: GameMode, seed: u64) {
        self.game = Game::with_seed(mode, seed);
        self.begin_game();
    }

    /// Start a new game in `mode` unless it is already being played.
    pub fn change_mode(&mut self, mode: GameMode) -> bool {
        if self.game.mode() == mode {
            return false;
        }
        self.start_new_game(mode);
        true
    }

    /// Deal the current cards again. Counts as a game played.
    pub fn restart(&mut self) {
        self.game.restart();
        self.begin_game();
    }

    fn begin_game(&mut self) {
        self.undo.clear();
        log::info!("new {} game, seed {}", self.game.mode(), self.game.seed());
        self.stats.record_game_started();
        self.stats.check_achievements(Some(&self.game));
        self.collect_persist_error();
    }

    // === Play ===

    /// Deal a row from the stock.
    pub fn deal(&mut self) -> Option<TurnReport> {
        self.apply(&Action::Deal)
    }

    /// Move the run starting at `start` in column `from` onto column `to`.
    pub fn move_sequence(&mut self, from: usize, start: usize, to: usize) -> Option<TurnReport> {
        self.apply(&Action::move_run(from, start, to))
    }

    /// Apply `action` if it is legal, recording its effects.
    ///
    /// Returns `None` and changes nothing when the action is rejected.
    pub fn apply(&mut self, action: &Action) -> Option<TurnReport> {
        if !self.game.is_legal(action) {
            log::debug!("rejected {action}");
            return None;
        }

        let before = self.game.copy();
        let runs_before = self.game.completed_sequences();
        if !self.game.apply_action(action) {
            return None;
        }
        self.push_undo(before);

        if let Action::Move { .. } = action {
            self.stats.record_move();
        }

        let completed = self.game.completed_sequences() - runs_before;
        let won = completed > 0 && self.game.is_game_won();
        if completed > 0 {
            self.stats.record_sequences(completed as u32);
            if won {
                self.stats.record_win(&self.game);
            }
            self.stats.flush();
        }
        let unlocked = self.stats.check_achievements(Some(&self.game));
        self.collect_persist_error();

        Some(TurnReport {
            completed_sequences: completed,
            won,
            unlocked,
        })
    }

    /// The first legal move, else a deal if the stock allows.
    #[must_use]
    pub fn hint(&self) -> Option<Action> {
        self.game.hint()
    }

    /// Advance the game clock by a second; stopped once the game is won.
    pub fn tick(&mut self) {
        if !self.game.is_game_won() {
            self.game.tick();
        }
    }

    // === Undo ===

    fn push_undo(&mut self, snapshot: Game) {
        self.undo.push_back(snapshot);
        while self.undo.len() > self.config.max_undo {
            self.undo.pop_front();
        }
    }

    /// Return to the position before the last accepted action.
    ///
    /// Statistics already recorded are kept.
    pub fn undo(&mut self) -> bool {
        match self.undo.pop_back() {
            Some(previous) => {
                self.game.restore_from(previous);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    // === Saves ===

    /// Save the current game under `label`.
    pub fn save_game(&self, label: &str, remark: &str) -> Result<PathBuf, PersistError> {
        self.saves.save(&SaveData::new(&self.game, label, remark))
    }

    /// Saves on disk, newest first.
    pub fn saved_games(&self) -> Result<Vec<SaveEntry>, PersistError> {
        self.saves.list()
    }

    /// Continue from a save. The undo history is cleared.
    pub fn load_game(&mut self, save: SaveData) {
        log::info!("loading save \"{}\" from {}", save.label(), save.formatted_saved_at());
        self.game = save.into_game();
        self.undo.clear();
    }

    // === Queries ===

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn stats(&self) -> &Statistics {
        self.stats.stats()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The latest statistics write that failed, if any.
    #[must_use]
    pub fn last_persist_error(&self) -> Option<&PersistError> {
        self.last_persist_error.as_ref()
    }

    /// Forget the recorded write failure, e.g. after reporting it.
    pub fn clear_persist_error(&mut self) {
        self.last_persist_error = None;
    }

    fn collect_persist_error(&mut self) {
        if let Some(e) = self.stats.take_error() {
            self.last_persist_error = Some(e);
        }
    }
}
