//! Playing cards.
//!
//! A `Card` is a suit and rank that never change, plus a face-up flag that
//! flips as the card is exposed on the tableau. Cards are plain values:
//! cloning a column clones its cards.

use serde::{Deserialize, Serialize};

/// Lowest rank (Ace).
pub const ACE: u8 = 1;

/// Highest rank (King).
pub const KING: u8 = 13;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
        }
    }
}

/// A single card.
///
/// ## Example
///
/// ```
/// use spider_engine::cards::{Card, Suit};
///
/// let mut queen = Card::new(Suit::Spade, 12);
/// assert!(!queen.face_up);
///
/// queen.face_up = true;
/// assert_eq!(queen.rank_symbol(), "Q");
/// assert_eq!(queen.to_string(), "Q♠");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: u8,

    /// Is this card showing its face?
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card. `rank` is 1 (Ace) through 13 (King).
    #[must_use]
    pub fn new(suit: Suit, rank: u8) -> Self {
        debug_assert!((ACE..=KING).contains(&rank), "rank out of range: {rank}");
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub fn revealed(suit: Suit, rank: u8) -> Self {
        Self {
            face_up: true,
            ..Self::new(suit, rank)
        }
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Does the rank lie in 1..=13?
    #[must_use]
    pub const fn has_valid_rank(&self) -> bool {
        self.rank >= ACE && self.rank <= KING
    }

    /// Can `next` sit directly on this card inside a movable run?
    ///
    /// Both face-up, same suit, `next` exactly one rank lower.
    #[must_use]
    pub fn continues_run(&self, next: &Card) -> bool {
        self.face_up
            && next.face_up
            && self.suit == next.suit
            && self.rank.checked_sub(1) == Some(next.rank)
    }

    /// Rank as printed on the card: A, 2..10, J, Q, K.
    #[must_use]
    pub fn rank_symbol(&self) -> String {
        match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank_symbol(), self.suit.symbol())
        } else {
            write!(f, "[??]")
        }
    }
}
