//! Planning dataset documents.
//!
//! # Responsibility
//! - Load the hand-maintained backlog and per-sprint JSON documents into the
//!   typed domain model.
//! - Keep file-format details inside this boundary.
//!
//! # Invariants
//! - Loader errors always name the offending path.
//! - Structural validation (non-empty join keys, lenient hour coercion)
//!   happens during deserialization, never after.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod load;

pub use load::{load_backlog, load_sprint, load_sprints};

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Error reading or decoding a dataset document.
#[derive(Debug)]
pub enum DatasetError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read dataset `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "malformed dataset `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
