//! Player actions.
//!
//! Spider has exactly two kinds of action:
//! - "Deal" = one card from the stock onto every column
//! - "Move" = a movable run from one column onto another
//!
//! Columns are addressed by index (0..10), cards by their index inside
//! the column (0 = bottom).

use serde::{Deserialize, Serialize};

/// A complete game action.
///
/// ## Example
///
/// ```
/// use spider_engine::core::Action;
///
/// let deal = Action::Deal;
/// let shift = Action::move_run(2, 4, 7);
///
/// assert!(deal.is_deal());
/// assert_eq!(shift.source_column(), Some(2));
/// assert_eq!(shift.to_string(), "move column 3 card 5 -> column 8");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Deal a row of ten cards from the stock.
    Deal,
    /// Move the run starting at `start` in column `from` onto column `to`.
    Move {
        from: usize,
        start: usize,
        to: usize,
    },
}

impl Action {
    /// Create a move action.
    #[must_use]
    pub const fn move_run(from: usize, start: usize, to: usize) -> Self {
        Self::Move { from, start, to }
    }

    /// Is this a deal from the stock?
    #[must_use]
    pub const fn is_deal(&self) -> bool {
        matches!(self, Self::Deal)
    }

    /// Column the action takes cards from, if any.
    #[must_use]
    pub const fn source_column(&self) -> Option<usize> {
        match self {
            Self::Deal => None,
            Self::Move { from, .. } => Some(*from),
        }
    }

    /// Column the action puts cards onto, if it targets a single column.
    #[must_use]
    pub const fn target_column(&self) -> Option<usize> {
        match self {
            Self::Deal => None,
            Self::Move { to, .. } => Some(*to),
        }
    }
}

impl std::fmt::Display for Action {
    /// One-based column and card numbers, as a player would count them.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deal => write!(f, "deal"),
            Self::Move { from, start, to } => write!(
                f,
                "move column {} card {} -> column {}",
                from + 1,
                start + 1,
                to + 1
            ),
        }
    }
}
