//! Core engine types: actions, RNG, configuration.
//!
//! These are the building blocks shared by the tableau rules, the
//! session controller and persistence.

pub mod rng;
pub mod config;
pub mod action;

pub use rng::GameRng;
pub use config::{EngineConfig, DEFAULT_MAX_UNDO, DEFAULT_SAVE_DIR, DEFAULT_STATS_FILE};
pub use action::Action;
