//! # simon-says
//!
//! The children's game "Simon Says" on the command line.
//!
//! Simon calls out commands. Some are prefixed with "Simon Says", some with
//! a decoy name, some with nothing. Type the action when Simon says so;
//! otherwise answer with an empty line. Every obeyed command scores a point
//! and the first mistake ends the attempt.
//!
//! ## Design Principles
//!
//! 1. **No globals**: the catalog, names, score and timers are plain values
//!    passed through the engine and session.
//!
//! 2. **Injectable randomness**: every draw goes through `RandomSource`, so a
//!    fixed seed or a scripted sequence replays a game exactly.
//!
//! 3. **Tagged prefixes**: a command's prefix is a `Prefix` variant, so
//!    judging is an exhaustive match rather than string comparison.
//!
//! ## Modules
//!
//! - `core`: actions, RNG, configuration, errors
//! - `catalog`: the action list and its loader
//! - `console`: line-based player I/O
//! - `rules`: drawing and judging rounds
//! - `session`: the replay loop and timing

pub mod core;
pub mod catalog;
pub mod console;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, AuthorityNames, BandThresholds, GameConfig,
    GameRng, RandomSource, ScriptedRng,
    Result, SimonError,
};

pub use crate::catalog::Catalog;

pub use crate::console::{Console, Terminal};

pub use crate::rules::{Band, Command, Prefix, RoundEngine, RoundOutcome, SimonRules};

pub use crate::session::{MinutesSeconds, Session, SessionState, SessionSummary};
