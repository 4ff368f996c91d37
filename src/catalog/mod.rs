//! The action catalog: every phrase Simon might call out.
//!
//! - `collection`: the ordered, de-duplicated `Catalog`
//! - `loader`: reading a catalog from a line-delimited file

pub mod collection;
pub mod loader;

pub use collection::Catalog;
pub use loader::{load, from_reader};
