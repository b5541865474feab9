//! Spider Solitaire rules.
//!
//! - Ten columns; the first four start with six cards, the rest with five
//! - Only the top card of each column starts face-up
//! - A run of face-up cards of one suit, descending by one, moves as a unit
//! - A run may land on an empty column or on a card one rank higher, of any suit
//! - Each deal puts one card from the stock on every column
//! - A King..Ace run of one suit is removed to the foundations; eight win
//!
//! `Game` also implements [`RulesEngine`](crate::rules::RulesEngine), which
//! enumerates legal actions and provides hints.

mod mode;
mod spider;

pub use mode::{GameMode, RUNS_PER_DECK};
pub use spider::{
    Foundation, Game, COLUMN_COUNT, DEAL_PENALTY, DECK_SIZE, SEQUENCE_BONUS, SEQUENCE_LENGTH,
};
