//! Deck configurations.
//!
//! Every mode plays with 104 cards: eight full runs of Ace..King. Fewer
//! suits means more copies of each suit.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit, ACE, KING};

/// Number of Ace..King runs in every deck.
pub const RUNS_PER_DECK: usize = 8;

/// Difficulty / deck composition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameMode {
    /// Spades only, eight copies.
    #[default]
    SingleSuit,
    /// Spades and hearts, four copies each.
    TwoSuits,
    /// All four suits, two copies each.
    FourSuits,
}

impl GameMode {
    /// All modes, easiest first.
    pub const ALL: [GameMode; 3] = [GameMode::SingleSuit, GameMode::TwoSuits, GameMode::FourSuits];

    /// Suits used by this mode.
    #[must_use]
    pub fn suits(self) -> &'static [Suit] {
        match self {
            GameMode::SingleSuit => &[Suit::Spade],
            GameMode::TwoSuits => &[Suit::Spade, Suit::Heart],
            GameMode::FourSuits => &Suit::ALL,
        }
    }

    /// How many Ace..King runs of each suit the deck holds.
    #[must_use]
    pub fn copies_per_suit(self) -> usize {
        RUNS_PER_DECK / self.suits().len()
    }

    /// Does this mode's deck contain `suit`?
    #[must_use]
    pub fn uses_suit(self, suit: Suit) -> bool {
        self.suits().contains(&suit)
    }

    /// Build the unshuffled, face-down deck.
    #[must_use]
    pub fn build_deck(self) -> Vec<Card> {
        let copies = self.copies_per_suit();
        let mut deck = Vec::with_capacity(RUNS_PER_DECK * KING as usize);
        for &suit in self.suits() {
            for _ in 0..copies {
                deck.extend((ACE..=KING).map(|rank| Card::new(suit, rank)));
            }
        }
        deck
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GameMode::SingleSuit => "Single Suit",
            GameMode::TwoSuits => "Two Suits",
            GameMode::FourSuits => "Four Suits",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
