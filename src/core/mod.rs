//! Core types: actions, RNG, configuration, errors.
//!
//! Everything here is independent of the console. The round engine and
//! session driver build on these.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;

pub use action::Action;
pub use config::{
    AuthorityNames, BandThresholds, GameConfig, BAND_ROLL_MAX, DEFAULT_CATALOG_PATH, MAX_DECOYS,
    SIMON_SAYS,
};
pub use error::{Result, SimonError};
pub use rng::{GameRng, RandomSource, ScriptedRng};
