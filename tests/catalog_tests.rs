//! Catalog loading from files.

use std::io::Write;

use simon_says::catalog;
use simon_says::core::SimonError;
use tempfile::NamedTempFile;

fn write_catalog(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_keeps_order_and_drops_blanks() {
    let file = write_catalog("touch your nose\n\nclap your hands\n\n\njump\n");
    let catalog = catalog::load(file.path()).unwrap();

    let texts: Vec<_> = catalog.iter().map(|a| a.as_str()).collect();
    assert_eq!(texts, vec!["touch your nose", "clap your hands", "jump"]);
}

#[test]
fn test_load_blank_file_is_empty_catalog() {
    let file = write_catalog("\n\n   \n");
    let err = catalog::load(file.path()).unwrap_err();
    assert!(matches!(err, SimonError::EmptyCatalog { .. }));
}

#[test]
fn test_load_zero_byte_file_is_empty_catalog() {
    let file = write_catalog("");
    let err = catalog::load(file.path()).unwrap_err();
    assert!(matches!(err, SimonError::EmptyCatalog { .. }));
}

#[test]
fn test_load_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("simonsActions.txt");

    let err = catalog::load(&path).unwrap_err();
    assert!(matches!(err, SimonError::CatalogRead { .. }));
    assert!(err.to_string().contains("simonsActions.txt"));
}

#[test]
fn test_load_directory_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = catalog::load(dir.path()).unwrap_err();
    assert!(matches!(err, SimonError::CatalogRead { .. }));
}

#[test]
fn test_bundled_catalog_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/simonsActions.txt");
    let catalog = catalog::load(path).unwrap();
    assert!(catalog.len() > 10);
    assert!(catalog.iter().all(|a| !a.as_str().trim().is_empty()));
}
