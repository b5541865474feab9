//! Files on disk: the statistics record and the save directory.
//!
//! Every record is bincode-encoded and written through a temporary file.
//! Reading is forgiving (callers fall back to defaults or skip the file);
//! writing reports a [`PersistError`].

mod codec;
mod error;
mod save;
mod store;

pub use codec::{read_record, write_record};
pub use error::PersistError;
pub use save::{SaveData, TIMESTAMP_FORMAT};
pub use store::{SaveEntry, SaveStore, SAVE_EXTENSION};
