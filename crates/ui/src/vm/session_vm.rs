use std::sync::Arc;

use services::DrillService;
use shabda_core::model::{LevelIndex, ProgressRecord};
use shabda_core::session::{Feedback, HistoryEntry, QuizSession, SessionScore, Submission};

use crate::views::ViewError;

/// What the learner can do inside a running session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    Submit,
    Replay,
    Reveal,
    Restart,
    Quit,
}

/// View model around one `QuizSession`.
///
/// Owns the feedback-clear generation counter: each submission (and each
/// restart) bumps the epoch, so a sleeping clear-task from a superseded
/// submission finds a stale epoch and does nothing. One timer slot, never
/// stacked.
pub struct SessionVm {
    level: LevelIndex,
    title: String,
    session: QuizSession,
    feedback_epoch: u64,
}

impl SessionVm {
    #[must_use]
    pub fn new(level: LevelIndex, title: String, session: QuizSession) -> Self {
        Self {
            level,
            title,
            session,
            feedback_epoch: 0,
        }
    }

    #[must_use]
    pub fn level(&self) -> LevelIndex {
        self.level
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn word(&self) -> Option<&str> {
        self.session.current_item().map(|item| item.source())
    }

    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.session.current_item().and_then(|item| item.hint())
    }

    /// The correct meaning of the current word, for the practice
    /// "Reveal" button.
    #[must_use]
    pub fn reveal(&self) -> Option<String> {
        self.session
            .current_item()
            .map(|item| item.meaning().to_owned())
    }

    #[must_use]
    pub fn score(&self) -> SessionScore {
        self.session.score()
    }

    #[must_use]
    pub fn progress_pct(&self) -> u8 {
        self.session.progress_pct()
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        self.session.history()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.session.feedback()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.session.is_finished() && self.session.score().passed()
    }

    #[must_use]
    pub fn feedback_epoch(&self) -> u64 {
        self.feedback_epoch
    }

    /// Submits the typed answer. Returns the submission so the view can
    /// schedule the feedback-clear timer against the new epoch.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` when the session is already finished.
    pub fn submit(&mut self, drill: &DrillService, raw_guess: &str) -> Result<Submission, ViewError> {
        let submission = drill
            .submit(&mut self.session, raw_guess)
            .map_err(ViewError::from)?;
        self.feedback_epoch = self.feedback_epoch.wrapping_add(1);
        Ok(submission)
    }

    /// Clears the feedback overlay iff `epoch` is still current; a stale
    /// timer from a superseded submission is a no-op.
    pub fn clear_feedback_if(&mut self, epoch: u64) {
        if self.feedback_epoch == epoch {
            self.session.clear_feedback();
        }
    }

    pub fn replay(&self, drill: &DrillService) {
        drill.replay(&self.session);
    }

    /// Starts the failed level over, same order.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` when the session is unfinished or was passed.
    pub fn restart(&mut self, drill: &DrillService) -> Result<(), ViewError> {
        drill
            .restart(&mut self.session)
            .map_err(ViewError::from)?;
        self.feedback_epoch = self.feedback_epoch.wrapping_add(1);
        Ok(())
    }

    /// Terminates the session and pushes the result through the unlock
    /// gate. `force_fail` is set by the quit buttons.
    pub async fn finish(&self, drill: &DrillService, force_fail: bool) -> ProgressRecord {
        let outcome = self.session.exit(force_fail);
        drill.finish(self.level, outcome).await
    }
}

/// # Errors
///
/// Returns `ViewError::UnknownLevel` / `ViewError::Locked` when the index
/// is outside the catalog or not yet unlocked.
pub async fn start_session(drill: &Arc<DrillService>, level: u32) -> Result<SessionVm, ViewError> {
    let index = LevelIndex::new(level);
    let title = drill
        .catalog()
        .level(index)
        .map(|l| l.title().to_owned())
        .ok_or(ViewError::UnknownLevel)?;
    let session = drill.start(index).await.map_err(ViewError::from)?;
    Ok(SessionVm::new(index, title, session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::{Clock, ProgressService, SpeechDispatcher};
    use shabda_core::{Catalog, fixed_now};
    use storage::repository::InMemoryRepository;

    fn drill() -> Arc<DrillService> {
        let catalog = Catalog::builtin();
        let progress = ProgressService::new(
            Clock::fixed(fixed_now()),
            Arc::new(InMemoryRepository::new()),
            catalog.total_levels(),
        );
        Arc::new(DrillService::new(
            catalog,
            progress,
            SpeechDispatcher::disabled(),
        ))
    }

    #[tokio::test]
    async fn locked_level_maps_to_a_view_error() {
        let drill = drill();
        let err = start_session(&drill, 5).await.unwrap_err();
        assert_eq!(err, ViewError::Locked);

        let err = start_session(&drill, 99).await.unwrap_err();
        assert_eq!(err, ViewError::UnknownLevel);
    }

    #[tokio::test]
    async fn submit_bumps_the_epoch_and_guards_stale_clears() {
        let drill = drill();
        let mut vm = start_session(&drill, 0).await.unwrap();
        assert_eq!(vm.title(), "Basics I");

        let answer = vm.reveal().unwrap();
        let submission = vm.submit(&drill, &answer).unwrap();
        assert!(submission.feedback.was_correct());
        let first_epoch = vm.feedback_epoch();

        // A second submission supersedes the first feedback.
        vm.submit(&drill, "wrong").unwrap();
        vm.clear_feedback_if(first_epoch);
        assert!(vm.feedback().is_some(), "stale timer must not clear");

        vm.clear_feedback_if(vm.feedback_epoch());
        assert!(vm.feedback().is_none());
    }

    #[tokio::test]
    async fn finishing_a_passed_level_unlocks_the_next() {
        let drill = drill();
        let mut vm = start_session(&drill, 0).await.unwrap();
        while let Some(answer) = vm.reveal() {
            vm.submit(&drill, &answer).unwrap();
        }
        assert!(vm.is_finished());
        assert!(vm.passed());

        let record = vm.finish(&drill, false).await;
        assert_eq!(record.unlocked_max(), LevelIndex::new(1));

        // Quit semantics: a forced fail never unlocks.
        let vm2 = start_session(&drill, 1).await.unwrap();
        let record = vm2.finish(&drill, true).await;
        assert_eq!(record.unlocked_max(), LevelIndex::new(1));
    }
}
