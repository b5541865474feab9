//! Card values: suit, rank and face-up state.

pub mod card;

pub use card::{Card, Suit, ACE, KING};
