//! Action phrases.
//!
//! An action is the thing Simon asks the player to do ("touch your nose").
//! Identity is the exact text; matching a player's response against it is
//! case-insensitive.

use serde::{Deserialize, Serialize};

/// A non-empty, trimmed action phrase.
///
/// ## Example
///
/// ```
/// use simon_says::core::Action;
///
/// let clap = Action::new("  clap your hands ").unwrap();
/// assert_eq!(clap.as_str(), "clap your hands");
/// assert!(clap.matches("CLAP your Hands"));
///
/// assert!(Action::new("   ").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(String);

impl Action {
    /// Create an action from text, trimming surrounding whitespace.
    ///
    /// Returns `None` if nothing is left after trimming.
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Option<Self> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The action text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Does `response` name this action, ignoring case?
    #[must_use]
    pub fn matches(&self, response: &str) -> bool {
        self.0.to_lowercase() == response.to_lowercase()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Action {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
