//! Persistence errors.

use std::path::PathBuf;

/// Failure to read or write a statistics or save file.
///
/// Reads are usually recovered by the caller (defaults, skipped file);
/// write failures are reported so the player can be told.
#[derive(Debug)]
pub enum PersistError {
    /// The file system refused a read, write or directory operation.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A record could not be encoded.
    Encode(bincode::Error),
    /// A file did not decode as the expected record.
    Decode {
        path: PathBuf,
        source: bincode::Error,
    },
    /// A save decoded, but its game is not a legal 104-card position.
    Inconsistent { path: PathBuf },
}

impl PersistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PersistError::Io {
            path: path.into(),
            source,
        }
    }
}

impl std::fmt::Display for PersistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistError::Io { path, source } => {
                write!(f, "io error for {}: {source}", path.display())
            }
            PersistError::Encode(source) => write!(f, "could not encode record: {source}"),
            PersistError::Decode { path, source } => {
                write!(f, "could not decode {}: {source}", path.display())
            }
            PersistError::Inconsistent { path } => {
                write!(f, "{} does not hold a valid game", path.display())
            }
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistError::Io { source, .. } => Some(source),
            PersistError::Encode(source) | PersistError::Decode { source, .. } => {
                Some(source.as_ref())
            }
            PersistError::Inconsistent { .. } => None,
        }
    }
}
