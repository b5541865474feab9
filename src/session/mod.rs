//! The play-session controller a front end talks to.

mod controller;

pub use controller::{Session, TurnReport};
