use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of a level within the catalog sequence.
///
/// Doubles as the persisted progress value: the unlock gate stores the
/// highest unlocked index as the decimal text of a `LevelIndex`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelIndex(u32);

impl LevelIndex {
    /// Creates a new `LevelIndex`
    #[must_use]
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The index of the next level in the sequence.
    #[must_use]
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Debug for LevelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LevelIndex({})", self.0)
    }
}

impl fmt::Display for LevelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a `LevelIndex` from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelIndexError;

impl fmt::Display for ParseLevelIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse LevelIndex from string")
    }
}

impl std::error::Error for ParseLevelIndexError {}

impl FromStr for LevelIndex {
    type Err = ParseLevelIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(LevelIndex::new)
            .map_err(|_| ParseLevelIndexError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_index_display() {
        let index = LevelIndex::new(7);
        assert_eq!(index.to_string(), "7");
    }

    #[test]
    fn level_index_from_str() {
        let index: LevelIndex = "3".parse().unwrap();
        assert_eq!(index, LevelIndex::new(3));
    }

    #[test]
    fn level_index_from_str_trims() {
        let index: LevelIndex = " 10 ".parse().unwrap();
        assert_eq!(index, LevelIndex::new(10));
    }

    #[test]
    fn level_index_from_str_invalid() {
        assert!("not-a-number".parse::<LevelIndex>().is_err());
        assert!("-1".parse::<LevelIndex>().is_err());
        assert!("".parse::<LevelIndex>().is_err());
    }

    #[test]
    fn level_index_roundtrip() {
        let original = LevelIndex::new(42);
        let deserialized: LevelIndex = original.to_string().parse().unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn level_index_next() {
        assert_eq!(LevelIndex::new(0).next(), LevelIndex::new(1));
        assert_eq!(LevelIndex::new(u32::MAX).next(), LevelIndex::new(u32::MAX));
    }
}
