use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VocabItemError {
    #[error("vocabulary source word cannot be empty")]
    EmptySource,

    #[error("vocabulary meaning cannot be empty")]
    EmptyMeaning,
}

//
// ─── VOCAB ITEM ────────────────────────────────────────────────────────────────
//

/// A single vocabulary entry: the word to display and speak, the meaning
/// the learner has to type, and an optional transliteration hint.
///
/// The hint is display-only and never takes part in answer comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabItem {
    source: String,
    meaning: String,
    hint: Option<String>,
}

impl VocabItem {
    /// Creates a new `VocabItem`.
    ///
    /// # Errors
    ///
    /// Returns `VocabItemError::EmptySource` / `EmptyMeaning` when the
    /// respective field is empty or whitespace-only.
    pub fn new(
        source: impl Into<String>,
        meaning: impl Into<String>,
        hint: Option<String>,
    ) -> Result<Self, VocabItemError> {
        let source = source.into();
        if source.trim().is_empty() {
            return Err(VocabItemError::EmptySource);
        }
        let meaning = meaning.into();
        if meaning.trim().is_empty() {
            return Err(VocabItemError::EmptyMeaning);
        }

        let hint = hint.map(|h| h.trim().to_owned()).filter(|h| !h.is_empty());

        Ok(Self {
            source: source.trim().to_owned(),
            meaning: meaning.trim().to_owned(),
            hint,
        })
    }

    /// Infallible constructor for the compiled-in catalog, whose entries
    /// are curated and known non-empty.
    pub(crate) fn from_static(source: &str, meaning: &str, hint: Option<&str>) -> Self {
        Self {
            source: source.to_owned(),
            meaning: meaning.to_owned(),
            hint: hint.map(str::to_owned),
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Case-insensitive `(source, meaning)` pair used to deduplicate
    /// entries within a level.
    #[must_use]
    pub fn identity(&self) -> (String, String) {
        (self.source.to_lowercase(), self.meaning.to_lowercase())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_rejects_empty_source() {
        let err = VocabItem::new("   ", "hello", None).unwrap_err();
        assert_eq!(err, VocabItemError::EmptySource);
    }

    #[test]
    fn item_rejects_empty_meaning() {
        let err = VocabItem::new("नमस्ते", " ", None).unwrap_err();
        assert_eq!(err, VocabItemError::EmptyMeaning);
    }

    #[test]
    fn item_trims_fields_and_filters_empty_hint() {
        let item = VocabItem::new("  नमस्ते ", " hello ", Some("   ".into())).unwrap();
        assert_eq!(item.source(), "नमस्ते");
        assert_eq!(item.meaning(), "hello");
        assert_eq!(item.hint(), None);
    }

    #[test]
    fn item_keeps_hint() {
        let item = VocabItem::new("नमस्ते", "hello", Some("namaste".into())).unwrap();
        assert_eq!(item.hint(), Some("namaste"));
    }

    #[test]
    fn identity_is_case_insensitive() {
        let a = VocabItem::new("Namaste", "Hello", None).unwrap();
        let b = VocabItem::new("namaste", "hello", Some("hint".into())).unwrap();
        assert_eq!(a.identity(), b.identity());
    }
}
