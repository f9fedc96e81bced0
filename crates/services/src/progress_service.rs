use std::sync::Arc;

use log::warn;

use shabda_core::Clock;
use shabda_core::model::{LevelIndex, ProgressRecord};
use storage::repository::ProgressRepository;

/// The single key the drill keeps in the progress store.
pub const PROGRESS_KEY: &str = "unlocked_max";

/// Durable unlock progress over a string-keyed store.
///
/// Reads and writes never fail from the caller's point of view: an
/// unreadable store, an absent key, or a corrupt value all fall back to
/// the first-run default, and a failed write leaves the in-memory record
/// authoritative for the rest of the process. The learner never sees a
/// persistence error.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    repository: Arc<dyn ProgressRepository>,
    total_levels: u32,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, repository: Arc<dyn ProgressRepository>, total_levels: u32) -> Self {
        Self {
            clock,
            repository,
            total_levels,
        }
    }

    /// Loads the current record, falling back to the default on any
    /// storage or parse failure and clamping stale out-of-range values.
    pub async fn load(&self) -> ProgressRecord {
        let now = self.clock.now();
        let fallback = ProgressRecord::initial(now);

        let raw = match self.repository.get(PROGRESS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback,
            Err(err) => {
                warn!("progress store unreadable, starting from level 0: {err}");
                return fallback;
            }
        };

        match raw.parse::<LevelIndex>() {
            Ok(unlocked_max) => {
                ProgressRecord::new(unlocked_max, now).clamped(self.total_levels)
            }
            Err(_) => {
                warn!("discarding corrupt progress value {raw:?}");
                fallback
            }
        }
    }

    /// Applies a finished session's result to the unlock gate and
    /// persists the record when it moved. Monotonic and idempotent:
    /// replaying the same pass event changes nothing.
    pub async fn record_result(&self, level: LevelIndex, passed: bool) -> ProgressRecord {
        let current = self.load().await;
        let updated = current.apply_result(level, passed, self.total_levels, self.clock.now());

        if updated.unlocked_max() != current.unlocked_max() {
            let value = updated.unlocked_max().to_string();
            if let Err(err) = self
                .repository
                .set(PROGRESS_KEY, &value, updated.updated_at())
                .await
            {
                warn!("failed to persist unlock progress {value}: {err}");
            }
        }

        updated
    }
}
