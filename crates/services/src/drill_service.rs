use shabda_core::Catalog;
use shabda_core::model::{LevelIndex, ProgressRecord};
use shabda_core::session::{QuizSession, SessionOutcome, Submission};

use crate::error::DrillError;
use crate::progress_service::ProgressService;
use crate::session_setup::build_session;
use crate::speech::SpeechDispatcher;

/// Menu row for one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSummary {
    pub index: LevelIndex,
    pub title: String,
    pub word_count: usize,
    pub unlocked: bool,
}

/// Orchestrates a level play-through: gate check, order construction,
/// submission forwarding, speech dispatch, and the terminal unlock
/// update.
#[derive(Clone)]
pub struct DrillService {
    catalog: Catalog,
    progress: ProgressService,
    speech: SpeechDispatcher,
}

impl DrillService {
    #[must_use]
    pub fn new(catalog: Catalog, progress: ProgressService, speech: SpeechDispatcher) -> Self {
        Self {
            catalog,
            progress,
            speech,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current progress plus one summary row per level, in catalog order.
    pub async fn level_summaries(&self) -> (ProgressRecord, Vec<LevelSummary>) {
        let record = self.progress.load().await;
        let summaries = self
            .catalog
            .iter()
            .map(|(index, level)| LevelSummary {
                index,
                title: level.title().to_owned(),
                word_count: level.len(),
                unlocked: record.is_unlocked(index),
            })
            .collect();
        (record, summaries)
    }

    /// Starts a session for the given level and speaks its first word.
    ///
    /// # Errors
    ///
    /// Returns `DrillError::UnknownLevel` for an index outside the
    /// catalog and `DrillError::LevelLocked` when the unlock gate has not
    /// reached the level yet.
    pub async fn start(&self, index: LevelIndex) -> Result<QuizSession, DrillError> {
        let level = self
            .catalog
            .level(index)
            .ok_or(DrillError::UnknownLevel(index))?;

        let record = self.progress.load().await;
        if !record.is_unlocked(index) {
            return Err(DrillError::LevelLocked(index));
        }

        let session = build_session(level);
        if let Some(command) = session.speak_command() {
            self.speech.dispatch(&command);
        }
        Ok(session)
    }

    /// Forwards one submission to the engine and dispatches whatever it
    /// asked for (the next word's vocalization, while items remain).
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` from the engine via
    /// `DrillError::Session`.
    pub fn submit(
        &self,
        session: &mut QuizSession,
        raw_guess: &str,
    ) -> Result<Submission, DrillError> {
        let submission = session.submit(raw_guess)?;
        self.speech.dispatch_all(&submission.commands);
        Ok(submission)
    }

    /// Re-speaks the current word (the "Play audio" button).
    pub fn replay(&self, session: &QuizSession) {
        if let Some(command) = session.speak_command() {
            self.speech.dispatch(&command);
        }
    }

    /// Resets a failed, finished session for another try over the same
    /// order, speaking the first word again.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` from the engine via
    /// `DrillError::Session`.
    pub fn restart(&self, session: &mut QuizSession) -> Result<(), DrillError> {
        let commands = session.restart()?;
        self.speech.dispatch_all(&commands);
        Ok(())
    }

    /// Reports a terminated session to the unlock gate.
    pub async fn finish(&self, index: LevelIndex, outcome: SessionOutcome) -> ProgressRecord {
        self.progress.record_result(index, outcome.passed).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress_service::PROGRESS_KEY;
    use crate::speech::{SpeechAdapter, Utterance};
    use shabda_core::{Clock, fixed_now};
    use std::sync::{Arc, Mutex};
    use storage::repository::InMemoryRepository;

    #[derive(Default)]
    struct RecordingSpeech {
        spoken: Mutex<Vec<String>>,
    }

    impl SpeechAdapter for RecordingSpeech {
        fn speak(&self, utterance: &Utterance) -> bool {
            self.spoken.lock().unwrap().push(utterance.text.clone());
            true
        }
    }

    fn drill(repo: &InMemoryRepository, speech: Arc<RecordingSpeech>) -> DrillService {
        let catalog = Catalog::builtin();
        let progress = ProgressService::new(
            Clock::fixed(fixed_now()),
            Arc::new(repo.clone()),
            catalog.total_levels(),
        );
        DrillService::new(catalog, progress, SpeechDispatcher::new(speech))
    }

    #[tokio::test]
    async fn locked_levels_cannot_start() {
        let repo = InMemoryRepository::new();
        let drill = drill(&repo, Arc::new(RecordingSpeech::default()));

        let err = drill.start(LevelIndex::new(1)).await.unwrap_err();
        assert!(matches!(err, DrillError::LevelLocked(_)));

        let err = drill.start(LevelIndex::new(42)).await.unwrap_err();
        assert!(matches!(err, DrillError::UnknownLevel(_)));
    }

    #[tokio::test]
    async fn starting_speaks_the_first_word() {
        let repo = InMemoryRepository::new();
        let speech = Arc::new(RecordingSpeech::default());
        let drill = drill(&repo, speech.clone());

        let session = drill.start(LevelIndex::new(0)).await.unwrap();
        let spoken = speech.spoken.lock().unwrap();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0], session.current_item().unwrap().source());
    }

    #[tokio::test]
    async fn summaries_reflect_the_unlock_gate() {
        let repo = InMemoryRepository::new();
        repo.seed(PROGRESS_KEY, "2");
        let drill = drill(&repo, Arc::new(RecordingSpeech::default()));

        let (record, summaries) = drill.level_summaries().await;
        assert_eq!(record.unlocked_max(), LevelIndex::new(2));
        assert_eq!(summaries.len(), 11);
        assert!(summaries[0].unlocked);
        assert!(summaries[2].unlocked);
        assert!(!summaries[3].unlocked);
        assert_eq!(summaries[0].word_count, 50);
    }
}
