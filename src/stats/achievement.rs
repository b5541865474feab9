//! Achievements: a fixed, ordered catalog of rules over the statistics.
//!
//! Rules are plain data evaluated by [`Rule::is_met`]. Whether an
//! achievement is unlocked lives only in [`Statistics`], and an unlock is
//! never revoked.

use crate::game::{Game, GameMode};

use super::statistics::Statistics;

/// Condition under which an achievement is earned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// At least this many games started.
    GamesPlayed(u32),
    /// At least this many wins in any mode.
    TotalWins(u32),
    /// At least this many wins in one mode.
    ModeWins(GameMode, u32),
    /// Some mode's fastest win took at most this many seconds.
    WinWithin { seconds: u64 },
    /// The current game is won in fewer than this many moves.
    WinUnderMoves(u32),
    /// At least this many moves across all games.
    TotalMoves(u64),
}

impl Rule {
    /// Does the rule hold? `game` is the game just played, if any.
    #[must_use]
    pub fn is_met(&self, stats: &Statistics, game: Option<&Game>) -> bool {
        match *self {
            Rule::GamesPlayed(n) => stats.games_played() >= n,
            Rule::TotalWins(n) => stats.total_wins() >= n,
            Rule::ModeWins(mode, n) => stats.wins_in(mode) >= n,
            Rule::WinWithin { seconds } => GameMode::ALL
                .iter()
                .any(|&mode| stats.fastest_seconds(mode).is_some_and(|t| t <= seconds)),
            Rule::WinUnderMoves(n) => game.is_some_and(|g| g.is_game_won() && g.moves() < n),
            Rule::TotalMoves(n) => stats.total_moves() >= n,
        }
    }
}

/// One entry of the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    /// Stable key stored in the statistics file.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub rule: Rule,
}

impl Achievement {
    #[must_use]
    pub fn is_met(&self, stats: &Statistics, game: Option<&Game>) -> bool {
        self.rule.is_met(stats, game)
    }
}

/// Every achievement, in evaluation order.
pub static CATALOG: [Achievement; 8] = [
    Achievement {
        id: "NOVICE",
        name: "Novice",
        description: "Start your first game",
        rule: Rule::GamesPlayed(1),
    },
    Achievement {
        id: "FIRST_WIN",
        name: "First Victory",
        description: "Win a game",
        rule: Rule::TotalWins(1),
    },
    Achievement {
        id: "SINGLE_EXPERT",
        name: "Single-Suit Expert",
        description: "Win 10 single-suit games",
        rule: Rule::ModeWins(GameMode::SingleSuit, 10),
    },
    Achievement {
        id: "TWO_SUIT_PRO",
        name: "Two-Suit Pro",
        description: "Win 5 two-suit games",
        rule: Rule::ModeWins(GameMode::TwoSuits, 5),
    },
    Achievement {
        id: "FOUR_SUIT_KING",
        name: "Four-Suit King",
        description: "Win a four-suit game",
        rule: Rule::ModeWins(GameMode::FourSuits, 1),
    },
    Achievement {
        id: "SPEED_DEMON",
        name: "Speed Demon",
        description: "Win a game within 10 minutes",
        rule: Rule::WinWithin { seconds: 600 },
    },
    Achievement {
        id: "ECONOMIST",
        name: "Economist",
        description: "Win a game in fewer than 500 moves",
        rule: Rule::WinUnderMoves(500),
    },
    Achievement {
        id: "PERSISTENT",
        name: "Persistent",
        description: "Make 10,000 moves in total",
        rule: Rule::TotalMoves(10_000),
    },
];

/// Look up a catalog entry by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static Achievement> {
    CATALOG.iter().find(|a| a.id == id)
}

/// Unlock every achievement whose rule now holds, stamping `now_millis`.
///
/// Walks the catalog in order and returns the entries unlocked by this
/// call. Already unlocked entries are skipped even if their rule no
/// longer holds.
pub fn unlock_newly_met(
    stats: &mut Statistics,
    game: Option<&Game>,
    now_millis: i64,
) -> Vec<&'static Achievement> {
    let mut unlocked = Vec::new();
    for achievement in &CATALOG {
        if stats.is_unlocked(achievement.id) || !achievement.is_met(stats, game) {
            continue;
        }
        stats.unlock_achievement(achievement.id, now_millis);
        unlocked.push(achievement);
    }
    unlocked
}
