//! Rules engine trait.
//!
//! `RulesEngine` lets callers drive the game through [`Action`] values:
//! - Legal actions for the current position
//! - How actions modify the game
//! - Win/stall conditions
//!
//! [`Action`]: crate::core::Action

pub mod engine;

pub use engine::{GameResult, RulesEngine};
