//! Address book snapshot persistence.
//!
//! # Responsibility
//! - Save and load the person list as a JSON snapshot file.
//! - Keep file-format details out of registry/command code.
//!
//! # Invariants
//! - Load re-validates every person and the same-person duplicate invariant;
//!   a corrupted snapshot is rejected, not masked.
//! - The core never reads application data from a snapshot that failed
//!   validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_store;

pub use json_store::{load_address_book, save_address_book};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// Snapshot decoded but broke a domain invariant.
    InvalidData(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted address book data: {message}")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
