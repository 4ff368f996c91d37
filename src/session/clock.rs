//! Duration display.

use std::time::Duration;

/// Renders a duration as whole minutes plus remaining whole seconds.
///
/// ```
/// use std::time::Duration;
/// use simon_says::session::MinutesSeconds;
///
/// let shown = MinutesSeconds(Duration::from_millis(125_900)).to_string();
/// assert_eq!(shown, "2 minutes and 5 seconds");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinutesSeconds(pub Duration);

impl MinutesSeconds {
    #[must_use]
    pub fn minutes(&self) -> u64 {
        self.0.as_secs() / 60
    }

    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.0.as_secs() % 60
    }
}

impl std::fmt::Display for MinutesSeconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} minutes and {} seconds", self.minutes(), self.seconds())
    }
}
