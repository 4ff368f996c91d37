//! Round engine: draw a command, read a response, judge it.
//!
//! Implementors supply the two pure halves of a round:
//! - `draw_command`: pick a prefix and an action
//! - `judge`: decide whether a response is a strike
//!
//! `play_round` glues them to a console and never needs overriding.

use crate::catalog::Catalog;
use crate::console::{Console, PROMPT};
use crate::core::{AuthorityNames, GameConfig, RandomSource, Result, SimonError, BAND_ROLL_MAX};

use super::command::{Band, Command, Prefix};

/// Result of one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Did this round end the current attempt?
    pub is_strike: bool,
    /// Points earned: 1 for obeying Simon, otherwise 0.
    pub score_delta: u32,
    /// Explanation shown on a strike. The session completes the sentence
    /// with the score.
    pub message: Option<String>,
}

impl RoundOutcome {
    /// Obeyed an authorized command.
    #[must_use]
    pub fn obeyed() -> Self {
        Self {
            is_strike: false,
            score_delta: 1,
            message: None,
        }
    }

    /// Correctly ignored an unauthorized command.
    #[must_use]
    pub fn ignored() -> Self {
        Self {
            is_strike: false,
            score_delta: 0,
            message: None,
        }
    }

    /// Got it wrong.
    #[must_use]
    pub fn strike(message: impl Into<String>) -> Self {
        Self {
            is_strike: true,
            score_delta: 0,
            message: Some(message.into()),
        }
    }
}

/// Round engine trait.
///
/// ## Implementation Notes
///
/// - `draw_command` must only pick actions from the engine's catalog
/// - `draw_command` and `judge` must be deterministic given their inputs
/// - Neither may fail; the only fallible step is console I/O
pub trait RoundEngine {
    /// The phrase that authorizes a command.
    fn authorizing_phrase(&self) -> &str;

    /// Draw this round's command.
    fn draw_command<R: RandomSource>(&self, rng: &mut R) -> Command;

    /// Judge a trimmed response to `command`.
    fn judge(&self, command: &Command, response: &str) -> RoundOutcome;

    /// Play one round on `console`.
    ///
    /// Shows the command, reads one line and judges it. A strike message is
    /// written without a trailing newline. Fails with
    /// `SimonError::InputClosed` if input ends before a response arrives.
    fn play_round<R: RandomSource, C: Console>(&self, rng: &mut R, console: &mut C) -> Result<RoundOutcome> {
        let command = self.draw_command(rng);
        console.say(command.text())?;

        let response = console.prompt(PROMPT)?.ok_or(SimonError::InputClosed)?;
        let outcome = self.judge(&command, &response);

        tracing::debug!(
            command = command.text(),
            response = %response,
            strike = outcome.is_strike,
            delta = outcome.score_delta,
            "round judged"
        );

        if let Some(message) = &outcome.message {
            console.write(message)?;
        }
        Ok(outcome)
    }
}

/// The classic rules.
#[derive(Clone, Debug)]
pub struct SimonRules {
    config: GameConfig,
    catalog: Catalog,
    names: AuthorityNames,
}

impl SimonRules {
    /// Create the rules for a player.
    ///
    /// Fails if `config` doesn't validate, or if a decoy is the player's
    /// own name.
    pub fn new(config: GameConfig, catalog: Catalog, player_name: impl Into<String>) -> Result<Self> {
        config.validate()?;

        let player_name = player_name.into();
        if let Some(decoy) = config.decoys.iter().find(|d| !d.is_empty() && **d == player_name) {
            return Err(SimonError::InvalidConfig(format!(
                "decoy name '{}' is the player's name",
                decoy
            )));
        }

        let names = AuthorityNames::new(&config, player_name);
        Ok(Self {
            config,
            catalog,
            names,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn names(&self) -> &AuthorityNames {
        &self.names
    }

    /// Pick the prefix for a band.
    ///
    /// The named band draws uniformly from every slot except the player's,
    /// which includes the authorizing phrase itself.
    fn draw_prefix<R: RandomSource>(&self, band: Band, rng: &mut R) -> Prefix {
        match band {
            Band::Authorized => Prefix::Authorized,
            Band::Named => {
                let candidates = self.names.prefix_candidates();
                let slot = &candidates[rng.next_index(0..candidates.len())];
                Prefix::classify(slot, self.names.authorizing())
            }
            Band::Unprefixed => Prefix::Unprefixed,
        }
    }
}

impl RoundEngine for SimonRules {
    fn authorizing_phrase(&self) -> &str {
        self.names.authorizing()
    }

    fn draw_command<R: RandomSource>(&self, rng: &mut R) -> Command {
        let roll = rng.next_index(0..BAND_ROLL_MAX);
        let band = Band::from_roll(roll, &self.config.bands);

        let actions = self.catalog.as_slice();
        let action = actions[rng.next_index(0..actions.len())].clone();

        let prefix = self.draw_prefix(band, rng);
        tracing::debug!(roll, ?band, ?prefix, action = %action, "drew command");

        Command::new(prefix, action, self.names.authorizing())
    }

    fn judge(&self, command: &Command, response: &str) -> RoundOutcome {
        match command.prefix() {
            Prefix::Authorized => {
                if command.action().matches(response) {
                    RoundOutcome::obeyed()
                } else {
                    RoundOutcome::strike(format!(
                        "Simon didn't say \"{}\", Simon said \"{}\". You got ",
                        response,
                        command.action()
                    ))
                }
            }
            Prefix::DecoyNamed(_) | Prefix::Unprefixed => {
                if response.is_empty() {
                    RoundOutcome::ignored()
                } else {
                    RoundOutcome::strike(format!("Simon didn't ask you to \"{}\". You got ", response))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Terminal;
    use crate::core::{Action, ScriptedRng};
    use std::io::Cursor;

    fn rules(actions: &[&str]) -> SimonRules {
        let catalog = Catalog::from_lines(actions.iter().copied()).unwrap();
        SimonRules::new(GameConfig::default(), catalog, "Ada").unwrap()
    }

    #[test]
    fn test_draw_authorized_band() {
        let rules = rules(&["clap your hands"]);
        let mut rng = ScriptedRng::new(vec![10, 0]);
        let cmd = rules.draw_command(&mut rng);
        assert_eq!(cmd.prefix(), &Prefix::Authorized);
        assert_eq!(cmd.text(), "Simon Says, clap your hands");
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_draw_unprefixed_band() {
        let rules = rules(&["clap your hands"]);
        let mut rng = ScriptedRng::new(vec![80, 0]);
        let cmd = rules.draw_command(&mut rng);
        assert_eq!(cmd.prefix(), &Prefix::Unprefixed);
        assert_eq!(cmd.text(), "clap your hands");
    }

    #[test]
    fn test_named_band_slot_zero_is_authorized() {
        let rules = rules(&["jump"]);
        // roll 60 -> named band, action 0, slot 0 = "Simon Says"
        let mut rng = ScriptedRng::new(vec![60, 0, 0]);
        let cmd = rules.draw_command(&mut rng);
        assert_eq!(cmd.prefix(), &Prefix::Authorized);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_named_band_empty_decoy_is_bare() {
        let rules = rules(&["jump"]);
        let mut rng = ScriptedRng::new(vec![60, 0, 1]);
        let cmd = rules.draw_command(&mut rng);
        assert_eq!(cmd.prefix(), &Prefix::Unprefixed);
        assert_eq!(cmd.text(), "jump");
    }

    #[test]
    fn test_named_band_real_decoy() {
        let catalog = Catalog::from_lines(["jump"]).unwrap();
        let config = GameConfig::new().with_decoys(["Simone", "Sam"]);
        let rules = SimonRules::new(config, catalog, "Ada").unwrap();

        let mut rng = ScriptedRng::new(vec![60, 0, 2]);
        let cmd = rules.draw_command(&mut rng);
        assert_eq!(cmd.prefix(), &Prefix::DecoyNamed("Sam".to_string()));
        assert_eq!(cmd.text(), "Sam, jump");
    }

    #[test]
    fn test_named_band_never_uses_player_name() {
        let catalog = Catalog::from_lines(["jump"]).unwrap();
        let config = GameConfig::new().with_decoys(["Simone", "Sam"]);
        let rules = SimonRules::new(config, catalog, "Ada").unwrap();

        for slot in 0..10 {
            let mut rng = ScriptedRng::new(vec![60, 0, slot]);
            let cmd = rules.draw_command(&mut rng);
            assert!(!cmd.text().starts_with("Ada"));
        }
    }

    #[test]
    fn test_judge_authorized() {
        let rules = rules(&["touch your nose"]);
        let cmd = Command::new(Prefix::Authorized, Action::new("touch your nose").unwrap(), "Simon Says");

        assert_eq!(rules.judge(&cmd, "TOUCH your NOSE"), RoundOutcome::obeyed());

        let outcome = rules.judge(&cmd, "touch your toes");
        assert!(outcome.is_strike);
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(outcome.message.as_deref(), Some("Simon didn't say \"touch your toes\", Simon said \"touch your nose\". You got "));
    }

    #[test]
    fn test_judge_unauthorized() {
        let rules = rules(&["touch your nose"]);
        let cmd = Command::new(
            Prefix::DecoyNamed("Simone".into()),
            Action::new("touch your nose").unwrap(),
            "Simon Says",
        );

        assert_eq!(rules.judge(&cmd, ""), RoundOutcome::ignored());

        let outcome = rules.judge(&cmd, "anything");
        assert!(outcome.is_strike);
        assert_eq!(outcome.message.as_deref(), Some("Simon didn't ask you to \"anything\". You got "));
    }

    #[test]
    fn test_play_round_writes_command_and_prompt() {
        let rules = rules(&["clap your hands"]);
        let mut rng = ScriptedRng::new(vec![10, 0]);
        let mut term = Terminal::new(Cursor::new("clap your hands\n"), Vec::new());

        let outcome = rules.play_round(&mut rng, &mut term).unwrap();
        assert_eq!(outcome, RoundOutcome::obeyed());

        let out = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(out, "Simon Says, clap your hands\n> ");
    }

    #[test]
    fn test_play_round_input_closed() {
        let rules = rules(&["clap your hands"]);
        let mut rng = ScriptedRng::new(vec![10, 0]);
        let mut term = Terminal::new(Cursor::new(""), Vec::new());

        let err = rules.play_round(&mut rng, &mut term).unwrap_err();
        assert!(matches!(err, SimonError::InputClosed));
    }

    #[test]
    fn test_new_rejects_player_name_as_decoy() {
        let catalog = Catalog::from_lines(["jump"]).unwrap();
        let config = GameConfig::new().with_decoys(["Ada"]);
        let err = SimonRules::new(config, catalog, "Ada").unwrap_err();
        assert!(matches!(err, SimonError::InvalidConfig(_)));
    }

    #[test]
    fn test_new_allows_empty_name_with_empty_decoys() {
        let catalog = Catalog::from_lines(["jump"]).unwrap();
        assert!(SimonRules::new(GameConfig::default(), catalog, "").is_ok());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let catalog = Catalog::from_lines(["jump"]).unwrap();
        let config = GameConfig::new().with_bands(90, 10);
        assert!(SimonRules::new(config, catalog, "Ada").is_err());
    }
}
