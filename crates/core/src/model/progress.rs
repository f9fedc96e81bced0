use chrono::{DateTime, Utc};

use crate::model::ids::LevelIndex;

/// Durable unlock progress: the highest level index the learner may play.
///
/// The record is immutable; the gate returns an updated copy. Updates are
/// monotonic (the unlocked index never decreases) and idempotent
/// (replaying the same pass event is a no-op).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressRecord {
    unlocked_max: LevelIndex,
    updated_at: DateTime<Utc>,
}

impl ProgressRecord {
    #[must_use]
    pub fn new(unlocked_max: LevelIndex, updated_at: DateTime<Utc>) -> Self {
        Self {
            unlocked_max,
            updated_at,
        }
    }

    /// The first-run record: only level 0 unlocked.
    #[must_use]
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self::new(LevelIndex::new(0), now)
    }

    #[must_use]
    pub fn unlocked_max(&self) -> LevelIndex {
        self.unlocked_max
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// A level is playable only if its index is at or below the unlocked
    /// maximum.
    #[must_use]
    pub fn is_unlocked(&self, level: LevelIndex) -> bool {
        level <= self.unlocked_max
    }

    /// Applies a finished session's result to the gate.
    ///
    /// Unlocks `level + 1` when the session passed, the level is at or
    /// beyond the current frontier, and it is not the last level.
    /// Everything else leaves the record unchanged.
    #[must_use]
    pub fn apply_result(
        &self,
        level: LevelIndex,
        passed: bool,
        total_levels: u32,
        now: DateTime<Utc>,
    ) -> Self {
        let unlocks = passed
            && level >= self.unlocked_max
            && level.value().saturating_add(1) < total_levels;
        if unlocks {
            Self::new(level.next(), now)
        } else {
            *self
        }
    }

    /// Clamps an out-of-range unlocked index (e.g. from a stale or edited
    /// store) back into the catalog.
    #[must_use]
    pub fn clamped(self, total_levels: u32) -> Self {
        let max = total_levels.saturating_sub(1);
        if self.unlocked_max.value() > max {
            Self::new(LevelIndex::new(max), self.updated_at)
        } else {
            self
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
