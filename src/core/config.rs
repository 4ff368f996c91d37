//! Game configuration.
//!
//! `GameConfig` holds everything the round engine and session need that
//! isn't the catalog itself:
//! - the authorizing phrase ("Simon Says")
//! - the decoy names that may prefix an unauthorized command
//! - the band thresholds that weight authorized vs. unauthorized commands
//! - where to load the catalog from, and an optional RNG seed
//!
//! The defaults reproduce the classic game: half of all commands are
//! authorized, a quarter draw a prefix from the non-player name slots, and a
//! quarter are bare.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{Result, SimonError};

/// Default authorizing phrase.
pub const SIMON_SAYS: &str = "Simon Says";

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "simonsActions.txt";

/// Exclusive upper bound of the band roll.
pub const BAND_ROLL_MAX: usize = 100;

/// Most decoy names a game can carry.
pub const MAX_DECOYS: usize = 2;

/// Where the band roll splits into authorized / named / unprefixed.
///
/// A roll in `[0, authorized)` is authorized, `[authorized, named)` draws a
/// name slot, and `[named, 100)` is bare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThresholds {
    pub authorized: usize,
    pub named: usize,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            authorized: 50,
            named: 75,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// The phrase that authorizes a command.
    pub authorizing_phrase: String,

    /// Decoy name slots. An empty string means "no name at all".
    pub decoys: SmallVec<[String; MAX_DECOYS]>,

    /// Band split points on a `[0, 100)` roll.
    pub bands: BandThresholds,

    /// Line-delimited action file.
    pub catalog_path: PathBuf,

    /// RNG seed. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            authorizing_phrase: SIMON_SAYS.to_string(),
            decoys: SmallVec::from_iter([String::new(), String::new()]),
            bands: BandThresholds::default(),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the decoy names.
    ///
    /// Fewer than two names are padded with empty decoys so the name band
    /// keeps its shape.
    #[must_use]
    pub fn with_decoys<I, S>(mut self, decoys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.decoys = decoys
            .into_iter()
            .map(|d| Into::<String>::into(d).trim().to_string())
            .collect();
        while self.decoys.len() < MAX_DECOYS {
            self.decoys.push(String::new());
        }
        self
    }

    /// Set the authorizing phrase.
    #[must_use]
    pub fn with_authorizing_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.authorizing_phrase = phrase.into();
        self
    }

    /// Set the band thresholds.
    #[must_use]
    pub fn with_bands(mut self, authorized: usize, named: usize) -> Self {
        self.bands = BandThresholds { authorized, named };
        self
    }

    /// Set the catalog path.
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<()> {
        if self.authorizing_phrase.trim().is_empty() {
            return Err(SimonError::InvalidConfig(
                "authorizing phrase must not be empty".to_string(),
            ));
        }

        if self.decoys.len() > MAX_DECOYS {
            return Err(SimonError::InvalidConfig(format!(
                "at most {} decoy names are supported, got {}",
                MAX_DECOYS,
                self.decoys.len()
            )));
        }

        let BandThresholds { authorized, named } = self.bands;
        if authorized > named || named > BAND_ROLL_MAX {
            return Err(SimonError::InvalidConfig(format!(
                "band thresholds must satisfy authorized <= named <= {}, got {} and {}",
                BAND_ROLL_MAX, authorized, named
            )));
        }

        Ok(())
    }
}

/// The name slots a command prefix can come from.
///
/// Slots are `[authorizing phrase, decoys..., player]`. The player's own
/// name sits in the last slot and is never drawn as a prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorityNames {
    slots: SmallVec<[String; 4]>,
}

impl AuthorityNames {
    /// Build the slots for a player.
    pub fn new(config: &GameConfig, player_name: impl Into<String>) -> Self {
        let mut slots = SmallVec::new();
        slots.push(config.authorizing_phrase.clone());
        slots.extend(config.decoys.iter().cloned());
        slots.push(player_name.into());
        Self { slots }
    }

    /// All slots, player last.
    #[must_use]
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// The slots a prefix may be drawn from: everything but the player.
    #[must_use]
    pub fn prefix_candidates(&self) -> &[String] {
        &self.slots[..self.slots.len() - 1]
    }

    /// The player's name.
    #[must_use]
    pub fn player(&self) -> &str {
        &self.slots[self.slots.len() - 1]
    }

    /// The authorizing phrase.
    #[must_use]
    pub fn authorizing(&self) -> &str {
        &self.slots[0]
    }
}
