//! Session driver.
//!
//! A session greets the player, then plays rounds and accumulates the score
//! until a strike. After each strike it reports the score and the time the
//! last command took, and asks whether to play again. Saying "yes" resets
//! the score and timers; anything else ends the session with the total
//! time played.

pub mod clock;
pub mod driver;

pub use clock::MinutesSeconds;
pub use driver::{greet, welcome, Session, SessionState, SessionSummary};
