use std::collections::HashSet;
use thiserror::Error;

use crate::model::item::VocabItem;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelError {
    #[error("level title cannot be empty")]
    EmptyTitle,
}

/// An ordered, fixed-size vocabulary set the learner plays as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    title: String,
    items: Vec<VocabItem>,
}

impl Level {
    /// Creates a new Level.
    ///
    /// # Errors
    ///
    /// Returns `LevelError::EmptyTitle` if the title is empty or
    /// whitespace-only.
    pub fn new(title: impl Into<String>, items: Vec<VocabItem>) -> Result<Self, LevelError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LevelError::EmptyTitle);
        }

        Ok(Self {
            title: title.trim().to_owned(),
            items,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn items(&self) -> &[VocabItem] {
        &self.items
    }

    /// Number of entries as authored, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items a session actually plays: the authored list with
    /// case-insensitive `(source, meaning)` duplicates dropped, first
    /// occurrence winning. Source data is supposed to be duplicate-free
    /// already, but the engine dedups defensively on load.
    #[must_use]
    pub fn playable_items(&self) -> Vec<VocabItem> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter(|item| seen.insert(item.identity()))
            .cloned()
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn item(source: &str, meaning: &str) -> VocabItem {
        VocabItem::new(source, meaning, None).unwrap()
    }

    #[test]
    fn level_rejects_empty_title() {
        let err = Level::new("  ", Vec::new()).unwrap_err();
        assert_eq!(err, LevelError::EmptyTitle);
    }

    #[test]
    fn level_trims_title() {
        let level = Level::new("  Basics I ", vec![item("नमस्ते", "hello")]).unwrap();
        assert_eq!(level.title(), "Basics I");
        assert_eq!(level.len(), 1);
    }

    #[test]
    fn playable_items_drops_case_insensitive_duplicates() {
        let level = Level::new(
            "Dupes",
            vec![
                item("नमस्ते", "hello"),
                item("नमस्ते", "HELLO"),
                item("जलम्", "water"),
            ],
        )
        .unwrap();

        let playable = level.playable_items();
        assert_eq!(playable.len(), 2);
        assert_eq!(playable[0].meaning(), "hello");
        assert_eq!(playable[1].meaning(), "water");
    }

    #[test]
    fn playable_items_keeps_first_occurrence() {
        let with_hint = VocabItem::new("गच्छामि", "go", Some("gacchāmi".into())).unwrap();
        let level = Level::new("Verbs", vec![with_hint.clone(), item("गच्छामि", "go")]).unwrap();

        let playable = level.playable_items();
        assert_eq!(playable, vec![with_hint]);
    }

    #[test]
    fn playable_items_preserves_authored_order() {
        let level = Level::new(
            "Order",
            vec![item("a", "one"), item("b", "two"), item("c", "three")],
        )
        .unwrap();

        let meanings: Vec<_> = level
            .playable_items()
            .iter()
            .map(|i| i.meaning().to_owned())
            .collect();
        assert_eq!(meanings, vec!["one", "two", "three"]);
    }
}
