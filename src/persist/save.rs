//! Named saves.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::game::Game;

/// Display format of save timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A labeled snapshot of a game, one per save file.
///
/// The game is copied when the record is made, so later play does not
/// change it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    game: Game,
    label: String,
    remark: String,
    saved_at: DateTime<Local>,
}

impl SaveData {
    /// Snapshot `game` now.
    #[must_use]
    pub fn new(game: &Game, label: impl Into<String>, remark: impl Into<String>) -> Self {
        Self::with_timestamp(game, label, remark, Local::now())
    }

    /// Snapshot `game` with an explicit timestamp.
    #[must_use]
    pub fn with_timestamp(
        game: &Game,
        label: impl Into<String>,
        remark: impl Into<String>,
        saved_at: DateTime<Local>,
    ) -> Self {
        Self {
            game: game.copy(),
            label: label.into(),
            remark: remark.into(),
            saved_at,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Give up the snapshot, e.g. to resume it.
    #[must_use]
    pub fn into_game(self) -> Game {
        self.game
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn remark(&self) -> &str {
        &self.remark
    }

    #[must_use]
    pub fn saved_at(&self) -> DateTime<Local> {
        self.saved_at
    }

    /// `yyyy-MM-dd HH:mm:ss`
    #[must_use]
    pub fn formatted_saved_at(&self) -> String {
        self.saved_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl std::fmt::Display for SaveData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} ({})", self.formatted_saved_at(), self.label, self.remark)
    }
}
