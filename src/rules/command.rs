//! Commands: a prefix plus an action.
//!
//! The prefix decides how a response is judged, so it is modelled as a
//! tagged variant rather than as raw text glued onto the action.

use crate::core::{Action, BandThresholds};

/// Probability band a round's roll falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    /// Always prefixed with the authorizing phrase.
    Authorized,
    /// Prefix drawn from the non-player name slots.
    Named,
    /// No prefix at all.
    Unprefixed,
}

impl Band {
    /// Classify a roll in `[0, 100)`.
    #[must_use]
    pub fn from_roll(roll: usize, bands: &BandThresholds) -> Self {
        if roll < bands.authorized {
            Band::Authorized
        } else if roll < bands.named {
            Band::Named
        } else {
            Band::Unprefixed
        }
    }
}

/// Who, if anyone, a command is attributed to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// The authorizing phrase: the player must comply.
    Authorized,
    /// Someone other than Simon: the player must stay silent.
    DecoyNamed(String),
    /// A bare command: the player must stay silent.
    Unprefixed,
}

impl Prefix {
    /// Classify a drawn name slot.
    ///
    /// Only an exact match of the authorizing phrase authorizes. An empty
    /// slot is the "no name at all" decoy.
    #[must_use]
    pub fn classify(slot: &str, authorizing_phrase: &str) -> Self {
        if slot == authorizing_phrase {
            Prefix::Authorized
        } else if slot.is_empty() {
            Prefix::Unprefixed
        } else {
            Prefix::DecoyNamed(slot.to_string())
        }
    }

    /// Does this prefix require the player to act?
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        matches!(self, Prefix::Authorized)
    }
}

/// One round's command, ready to display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    prefix: Prefix,
    action: Action,
    text: String,
}

impl Command {
    /// Build a command. `authorizing_phrase` is only used to render
    /// `Prefix::Authorized`.
    #[must_use]
    pub fn new(prefix: Prefix, action: Action, authorizing_phrase: &str) -> Self {
        let text = match &prefix {
            Prefix::Authorized => format!("{}, {}", authorizing_phrase, action),
            Prefix::DecoyNamed(name) => format!("{}, {}", name, action),
            Prefix::Unprefixed => action.to_string(),
        };
        Self { prefix, action, text }
    }

    #[must_use]
    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    #[must_use]
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// The text shown to the player.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
