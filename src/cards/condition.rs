//! Condition cards.

use super::definition::CardBase;

/// A condition card. The short id is the slugged name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    pub base: CardBase,
}

impl Condition {
    pub fn new(base: CardBase) -> Self {
        Self { base }
    }

    /// Unique key: `{xws}%condition`.
    #[must_use]
    pub fn unique_key(&self) -> String {
        format!("{}%condition", self.base.xws)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_key() {
        let condition = Condition::new(CardBase::new("huntedcondition", "Hunted"));
        assert_eq!(condition.unique_key(), "huntedcondition%condition");
    }
}
