//! The compiled-in level catalog.
//!
//! This is the only configuration the app has: eleven levels of Sanskrit
//! vocabulary. Level 0 carries 50 curated entries; levels 1–10 are padded
//! to 50 entries by cyclically repeating a 10-item base list until the
//! content is curated. The session engine deduplicates on load, so the
//! padded levels play as 10 unique words.

use crate::model::{Level, LevelIndex, VocabItem};

/// Entries per level as authored.
pub const LEVEL_SIZE: usize = 50;

/// The fixed sequence of levels the learner progresses through.
#[derive(Debug, Clone)]
pub struct Catalog {
    levels: Vec<Level>,
}

impl Catalog {
    /// The built-in Sanskrit catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let base = base_verbs();
        let levels = vec![
            level("Basics I", basics_i()),
            level("Basics II", filler(&base)),
            level("Daily Life I", filler(&base)),
            level("Daily Life II", filler(&base)),
            level("Objects", filler(&base)),
            level("Nature", filler(&base)),
            level("People", filler(&base)),
            level("Verbs I", filler(&base)),
            level("Verbs II", filler(&base)),
            level("Abstract", filler(&base)),
            level("Review", filler(&base)),
        ];
        Self { levels }
    }

    #[must_use]
    pub fn total_levels(&self) -> u32 {
        self.levels.len() as u32
    }

    #[must_use]
    pub fn level(&self, index: LevelIndex) -> Option<&Level> {
        self.levels.get(index.value() as usize)
    }

    #[must_use]
    pub fn last_index(&self) -> LevelIndex {
        LevelIndex::new(self.total_levels().saturating_sub(1))
    }

    pub fn iter(&self) -> impl Iterator<Item = (LevelIndex, &Level)> {
        self.levels
            .iter()
            .enumerate()
            .map(|(i, level)| (LevelIndex::new(i as u32), level))
    }
}

fn level(title: &str, items: Vec<VocabItem>) -> Level {
    // Titles here are literals; the validated constructor cannot fail.
    Level::new(title, items).unwrap_or_else(|_| unreachable!("catalog titles are non-empty"))
}

/// Pads a base list to `LEVEL_SIZE` entries by cyclic repetition,
/// mirroring the authored data until real content lands.
fn filler(base: &[VocabItem]) -> Vec<VocabItem> {
    base.iter().cycle().take(LEVEL_SIZE).cloned().collect()
}

fn base_verbs() -> Vec<VocabItem> {
    [
        ("गच्छामि", "go", "gacchāmi"),
        ("आगच्छामि", "come", "āgacchāmi"),
        ("पश्यामि", "see", "paśyāmi"),
        ("शृणोमि", "hear", "śṛṇomi"),
        ("वदामि", "speak", "vadāmi"),
        ("जाने", "know", "jāne"),
        ("मन्ये", "think", "manye"),
        ("क्रीडामि", "play", "krīḍāmi"),
        ("नयामि", "lead", "nayāmi"),
        ("लिखामि", "write", "likhāmi"),
    ]
    .into_iter()
    .map(|(sa, en, translit)| VocabItem::from_static(sa, en, Some(translit)))
    .collect()
}

fn basics_i() -> Vec<VocabItem> {
    [
        ("नमस्ते", "hello", "namaste"),
        ("धन्यवादः", "thanks", "dhanyavādaḥ"),
        ("कृपया", "please", "kṛpayā"),
        ("शुभम्", "good", "śubham"),
        ("अहम्", "i", "aham"),
        ("त्वम्", "you", "tvam"),
        ("सः", "he", "saḥ"),
        ("सा", "she", "sā"),
        ("एतत्", "this", "etat"),
        ("तत्", "that", "tat"),
        ("कः", "who", "kaḥ"),
        ("किम्", "what", "kim"),
        ("कुत्र", "where", "kutra"),
        ("कदा", "when", "kadā"),
        ("कथम्", "how", "katham"),
        ("कुतः", "why", "kutaḥ"),
        ("भोजनम्", "food", "bhojanam"),
        ("जलम्", "water", "jalam"),
        ("गृहः", "house", "gṛhaḥ"),
        ("पथः", "road", "pathaḥ"),
        ("शाला", "school", "śālā"),
        ("गुरुः", "teacher", "guruḥ"),
        ("शिष्यः", "student", "śiṣyaḥ"),
        ("पुस्तकम्", "book", "pustakam"),
        ("लेखनम्", "writing", "lekhanam"),
        ("वाचनम्", "reading", "vācanam"),
        ("चित्रम्", "picture", "citram"),
        ("फलम्", "fruit", "phalam"),
        ("पुष्पम्", "flower", "puṣpam"),
        ("वृक्षः", "tree", "vṛkṣaḥ"),
        ("मित्रम्", "friend", "mitram"),
        ("कुटुम्बम्", "family", "kuṭumbam"),
        ("नगरम्", "city", "nagaram"),
        ("ग्रामः", "village", "grāmaḥ"),
        ("दिवसः", "day", "divasaḥ"),
        ("रात्रिः", "night", "rātriḥ"),
        ("सूर्यः", "sun", "sūryaḥ"),
        ("चन्द्रः", "moon", "candraḥ"),
        ("नभः", "sky", "nabhaḥ"),
        ("भूमिः", "earth", "bhūmiḥ"),
        ("गङ्गा", "ganga", "gaṅgā"),
        ("वायु", "air", "vāyu"),
        ("अग्निः", "fire", "agniḥ"),
        ("जलधिः", "ocean", "jaladhiḥ"),
        ("पर्वतः", "mountain", "parvataḥ"),
        ("वनम्", "forest", "vanam"),
        ("मार्गः", "path", "mārgaḥ"),
        ("हृदयम्", "heart", "hṛdayam"),
        ("मस्तिष्कः", "brain", "mastiṣkaḥ"),
        ("नेत्रे", "eyes", "netre"),
    ]
    .into_iter()
    .map(|(sa, en, translit)| VocabItem::from_static(sa, en, Some(translit)))
    .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_eleven_levels_of_fifty() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.total_levels(), 11);
        for (_, level) in catalog.iter() {
            assert_eq!(level.len(), LEVEL_SIZE);
        }
    }

    #[test]
    fn level_zero_is_fully_unique() {
        let catalog = Catalog::builtin();
        let level0 = catalog.level(LevelIndex::new(0)).unwrap();
        assert_eq!(level0.playable_items().len(), LEVEL_SIZE);
        assert_eq!(level0.title(), "Basics I");
    }

    #[test]
    fn filler_levels_collapse_to_the_base_list() {
        let catalog = Catalog::builtin();
        let level1 = catalog.level(LevelIndex::new(1)).unwrap();
        assert_eq!(level1.len(), LEVEL_SIZE);
        assert_eq!(level1.playable_items().len(), 10);
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.level(LevelIndex::new(11)).is_none());
        assert_eq!(catalog.last_index(), LevelIndex::new(10));
    }
}
