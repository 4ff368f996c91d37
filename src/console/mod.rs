//! Console I/O.
//!
//! The round engine and session talk to the player through the `Console`
//! trait. `Terminal` implements it over any buffered reader and writer, so
//! the same code drives stdin/stdout in the binary and in-memory buffers in
//! tests.

pub mod terminal;

pub use terminal::{Console, Terminal, PROMPT};
