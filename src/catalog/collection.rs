//! Ordered collection of distinct actions.
//!
//! A `Catalog` can only be built non-empty, so the round engine can draw an
//! index from it without checking.

use rustc_hash::FxHashSet;

use crate::core::Action;

/// Non-empty ordered list of distinct actions.
///
/// Insertion order is kept. Duplicates collapse to their first occurrence.
///
/// ## Example
///
/// ```
/// use simon_says::catalog::Catalog;
///
/// let catalog = Catalog::from_lines(["jump", "", "clap", "jump"]).unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get(0).unwrap().as_str(), "jump");
/// assert_eq!(catalog.get(1).unwrap().as_str(), "clap");
///
/// assert!(Catalog::from_lines(["", "  "]).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    actions: Vec<Action>,
}

impl Catalog {
    /// Build a catalog from raw lines.
    ///
    /// Blank lines are dropped. Returns `None` if no action survives.
    pub fn from_lines<I, S>(lines: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_actions(lines.into_iter().filter_map(Action::new))
    }

    /// Build a catalog from already-parsed actions.
    ///
    /// Returns `None` if `actions` is empty.
    pub fn from_actions(actions: impl IntoIterator<Item = Action>) -> Option<Self> {
        let mut seen = FxHashSet::default();
        let mut kept = Vec::new();

        for action in actions {
            if seen.insert(action.clone()) {
                kept.push(action);
            } else {
                tracing::debug!(action = %action, "dropping duplicate action");
            }
        }

        if kept.is_empty() {
            None
        } else {
            Some(Self { actions: kept })
        }
    }

    /// Get an action by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    /// Check if an action is in the catalog.
    #[must_use]
    pub fn contains(&self, action: &Action) -> bool {
        self.actions.contains(action)
    }

    /// Number of actions. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Always `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate over actions in order.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub(crate) fn as_slice(&self) -> &[Action] {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let catalog = Catalog::from_lines(["c", "a", "b"]).unwrap();
        let texts: Vec<_> = catalog.iter().map(Action::as_str).collect();
        assert_eq!(texts, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_drops_blank_and_trims() {
        let catalog = Catalog::from_lines(["", "  wave  ", "\t", "nod"]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().as_str(), "wave");
    }

    #[test]
    fn test_collapses_duplicates() {
        let catalog = Catalog::from_lines(["wave", "nod", " wave"]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(&Action::new("wave").unwrap()));
    }

    #[test]
    fn test_duplicates_are_case_sensitive() {
        let catalog = Catalog::from_lines(["wave", "Wave"]).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_empty_is_rejected() {
        assert!(Catalog::from_lines(Vec::<String>::new()).is_none());
        assert!(Catalog::from_lines(["", " "]).is_none());
        assert!(Catalog::from_actions(Vec::new()).is_none());
    }

    #[test]
    fn test_get_out_of_range() {
        let catalog = Catalog::from_lines(["wave"]).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get(1).is_none());
    }
}
