//! Round rules.
//!
//! `RoundEngine` defines how a round is drawn and judged. `SimonRules` is the
//! classic game:
//! - half of all commands carry the authorizing phrase
//! - a quarter draw a prefix from the non-player name slots
//! - the rest are bare
//!
//! Authorized commands must be answered with the action (case-insensitive);
//! everything else must be met with silence.

pub mod command;
pub mod engine;

pub use command::{Band, Command, Prefix};
pub use engine::{RoundEngine, RoundOutcome, SimonRules};
