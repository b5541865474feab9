//! # spider-engine
//!
//! The game-state engine of a Spider Solitaire application: tableau rules,
//! undo snapshots, lifetime statistics, achievements and named saves.
//! Rendering, input and animation belong to the front end.
//!
//! ## Design Principles
//!
//! 1. **Rules own the state**: every mutator of [`Game`] either applies in
//!    full or returns `false` and changes nothing.
//!
//! 2. **Snapshots are values**: a `Game` clone is a complete, independent
//!    copy, used for undo and for saves.
//!
//! 3. **No globals**: statistics live in an explicit [`StatsStore`] owned by
//!    the [`Session`].
//!
//! ## Modules
//!
//! - `core`: actions, RNG, configuration
//! - `cards`: suits, ranks and face-up state
//! - `game`: modes, the tableau and its rules
//! - `rules`: `RulesEngine` trait (legal actions, hints, end of game)
//! - `stats`: statistics, achievements and the statistics file
//! - `persist`: on-disk records and the save directory
//! - `session`: the controller a front end drives
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod core;
pub mod cards;
pub mod game;
pub mod rules;
pub mod stats;
pub mod persist;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Action, EngineConfig, GameRng};

pub use crate::cards::{Card, Suit};

pub use crate::game::{Game, GameMode, COLUMN_COUNT, DECK_SIZE};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::stats::{Achievement, Statistics, StatsStore, CATALOG};

pub use crate::persist::{PersistError, SaveData, SaveEntry, SaveStore};

pub use crate::session::{Session, TurnReport};
