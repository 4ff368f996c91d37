//! Error types.
//!
//! All failures are terminal at startup: a catalog that can't be read, a
//! catalog with nothing in it, or a configuration that makes no sense.
//! Once play begins the only thing that can go wrong is the console.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimonError {
    #[error("failed to read actions from {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no actions found in {}: every line is blank", path.display())]
    EmptyCatalog { path: PathBuf },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SimonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_read_message_names_path() {
        let err = SimonError::CatalogRead {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_io_converts() {
        let err: SimonError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, SimonError::Io(_)));
    }
}
