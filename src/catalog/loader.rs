//! Loading a catalog from a line-delimited source.
//!
//! One action per line. Blank lines are ignored; there is no quoting or
//! escaping. A source that reads cleanly but contains nothing usable is
//! still an error, because a round cannot be played without an action.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::{Result, SimonError};

use super::Catalog;

/// Load a catalog from a file.
pub fn load(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SimonError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = from_reader(BufReader::new(file), path)?;
    tracing::info!(path = %path.display(), actions = catalog.len(), "loaded action catalog");
    Ok(catalog)
}

/// Read a catalog from any buffered reader.
///
/// `origin` is only used to label errors.
pub fn from_reader(reader: impl BufRead, origin: impl AsRef<Path>) -> Result<Catalog> {
    let origin = origin.as_ref();
    let lines = reader
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|source| SimonError::CatalogRead {
            path: origin.to_path_buf(),
            source,
        })?;

    Catalog::from_lines(lines).ok_or_else(|| SimonError::EmptyCatalog {
        path: origin.to_path_buf(),
    })
}
