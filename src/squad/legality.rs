//! Aggregate legality of a squad.

use crate::cards::Legality;

/// Running legality of a squad.
///
/// Starts at `Standard` and only ever moves toward `Banned`: each card
/// seen drags the squad to the looser of the two tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalityTracker {
    current: Legality,
}

impl Default for LegalityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LegalityTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Legality::Standard,
        }
    }

    /// Fold in one card's tier. Returns the updated aggregate.
    pub fn update(&mut self, card: Legality) -> Legality {
        self.current = self.current.worst(card);
        self.current
    }

    #[must_use]
    pub const fn current(&self) -> Legality {
        self.current
    }
}

impl Extend<Legality> for LegalityTracker {
    fn extend<T: IntoIterator<Item = Legality>>(&mut self, iter: T) {
        for legality in iter {
            self.update(legality);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_standard() {
        assert_eq!(LegalityTracker::new().current(), Legality::Standard);
    }

    #[test]
    fn test_never_improves() {
        let mut tracker = LegalityTracker::new();
        assert_eq!(tracker.update(Legality::Epic), Legality::Epic);
        assert_eq!(tracker.update(Legality::Standard), Legality::Epic);
        assert_eq!(tracker.update(Legality::Wildspace), Legality::Epic);
        assert_eq!(tracker.update(Legality::Banned), Legality::Banned);
        assert_eq!(tracker.update(Legality::Standard), Legality::Banned);
    }

    #[test]
    fn test_extend() {
        let mut tracker = LegalityTracker::new();
        tracker.extend([Legality::Standard, Legality::Wildspace, Legality::Standard]);
        assert_eq!(tracker.current(), Legality::Wildspace);
    }
}
