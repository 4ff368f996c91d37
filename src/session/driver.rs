//! Session driver: greet, loop rounds, offer a replay.

use std::time::{Duration, Instant};

use crate::console::{Console, PROMPT};
use crate::core::{RandomSource, Result, SimonError};
use crate::rules::RoundEngine;

use super::clock::MinutesSeconds;

/// Mutable per-session counters.
#[derive(Clone, Debug)]
pub struct SessionState {
    /// Points in the current attempt.
    pub score: u32,
    /// When the current command was issued.
    pub round_start: Instant,
    /// When the session (or the latest replay) began.
    pub session_start: Instant,
    /// Attempts ended by a strike.
    pub attempts: u32,
    /// Highest score reached by any attempt.
    pub best_score: u32,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            score: 0,
            round_start: now,
            session_start: now,
            attempts: 0,
            best_score: 0,
        }
    }

    /// Start a fresh attempt: zero the score and restart both timers.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.score = 0;
        self.round_start = now;
        self.session_start = now;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// What a finished session reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub attempts: u32,
    pub best_score: u32,
    pub final_score: u32,
    pub total: Duration,
}

/// Print the greeting and ask the player's name.
///
/// Fails with `SimonError::InputClosed` if no name arrives.
pub fn welcome<C: Console>(console: &mut C) -> Result<String> {
    console.say("Welcome to Simon Says. Let's start. Simon says, 'What is your name?'")?;
    let name = console.prompt(PROMPT)?.ok_or(SimonError::InputClosed)?;
    greet(console, &name)?;
    Ok(name)
}

/// Greet a player whose name is already known.
pub fn greet<C: Console>(console: &mut C, name: &str) -> Result<()> {
    console.say(&format!(
        "Nice to meet you, {}. Remember, only do as Simon Says.",
        name
    ))?;
    Ok(())
}

/// Runs rounds until the player declines to play again.
#[derive(Debug)]
pub struct Session<E> {
    engine: E,
    state: SessionState,
}

impl<E: RoundEngine> Session<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            state: SessionState::new(),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Play until the player quits or input ends.
    pub fn run<R: RandomSource, C: Console>(&mut self, rng: &mut R, console: &mut C) -> Result<SessionSummary> {
        self.state.reset();
        tracing::info!("session started");

        loop {
            self.state.round_start = Instant::now();

            let outcome = match self.engine.play_round(rng, console) {
                Ok(outcome) => outcome,
                Err(SimonError::InputClosed) => {
                    tracing::info!("input closed mid-round");
                    console.say("")?;
                    break;
                }
                Err(e) => return Err(e),
            };

            self.state.score += outcome.score_delta;
            if !outcome.is_strike {
                continue;
            }

            self.state.attempts += 1;
            self.state.best_score = self.state.best_score.max(self.state.score);
            let round = MinutesSeconds(self.state.round_start.elapsed());
            tracing::debug!(score = self.state.score, attempts = self.state.attempts, "strike");

            console.say(&format!(
                "{} points! {}, Type \"Yes\" if you would like to play again. You played this round for {}.",
                self.state.score,
                self.engine.authorizing_phrase(),
                round
            ))?;

            match console.prompt(PROMPT)? {
                Some(answer) if answer.to_lowercase() == "yes" => self.state.reset(),
                _ => break,
            }
        }

        let total = self.state.session_start.elapsed();
        console.say(&format!(
            "Thanks for playing, goodbye! You played for a total of {}.",
            MinutesSeconds(total)
        ))?;

        let summary = SessionSummary {
            attempts: self.state.attempts,
            best_score: self.state.best_score,
            final_score: self.state.score,
            total,
        };
        tracing::info!(
            attempts = summary.attempts,
            best_score = summary.best_score,
            total_secs = summary.total.as_secs(),
            "session finished"
        );
        Ok(summary)
    }
}
