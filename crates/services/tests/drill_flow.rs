use std::sync::{Arc, Mutex};

use services::{
    Clock, DrillService, PROGRESS_KEY, ProgressService, SpeechAdapter, SpeechDispatcher, Utterance,
};
use shabda_core::model::LevelIndex;
use shabda_core::{Catalog, fixed_now};
use storage::repository::{InMemoryRepository, ProgressRepository};

#[derive(Default)]
struct RecordingSpeech {
    spoken: Mutex<Vec<String>>,
}

impl RecordingSpeech {
    fn count(&self) -> usize {
        self.spoken.lock().unwrap().len()
    }
}

impl SpeechAdapter for RecordingSpeech {
    fn speak(&self, utterance: &Utterance) -> bool {
        self.spoken.lock().unwrap().push(utterance.text.clone());
        true
    }
}

fn build_drill(repo: &InMemoryRepository, speech: Arc<RecordingSpeech>) -> DrillService {
    let catalog = Catalog::builtin();
    let progress = ProgressService::new(
        Clock::fixed(fixed_now()),
        Arc::new(repo.clone()),
        catalog.total_levels(),
    );
    DrillService::new(catalog, progress, SpeechDispatcher::new(speech))
}

#[tokio::test]
async fn passing_level_zero_unlocks_level_one() {
    let repo = InMemoryRepository::new();
    let speech = Arc::new(RecordingSpeech::default());
    let drill = build_drill(&repo, speech.clone());

    let mut session = drill.start(LevelIndex::new(0)).await.unwrap();
    let total = session.len();
    assert_eq!(total, 50);

    // Answer every word correctly by echoing its meaning.
    while let Some(item) = session.current_item().cloned() {
        let meaning = item.meaning().to_owned();
        drill.submit(&mut session, &meaning).unwrap();
    }
    assert!(session.is_finished());
    assert_eq!(session.score().pct(), 100);

    // One utterance at start, one per advance.
    assert_eq!(speech.count(), total);

    let outcome = session.exit(false);
    assert!(outcome.passed);
    let record = drill.finish(LevelIndex::new(0), outcome).await;
    assert_eq!(record.unlocked_max(), LevelIndex::new(1));
    assert_eq!(
        repo.get(PROGRESS_KEY).await.unwrap(),
        Some("1".to_owned())
    );

    // Level 1 is now playable; it collapses to the 10-word base list.
    let next = drill.start(LevelIndex::new(1)).await.unwrap();
    assert_eq!(next.len(), 10);
}

#[tokio::test]
async fn quitting_midway_never_unlocks() {
    let repo = InMemoryRepository::new();
    let drill = build_drill(&repo, Arc::new(RecordingSpeech::default()));

    let mut session = drill.start(LevelIndex::new(0)).await.unwrap();
    for _ in 0..3 {
        let meaning = session.current_item().unwrap().meaning().to_owned();
        drill.submit(&mut session, &meaning).unwrap();
    }

    // 3/3 so far, but the session is not finished.
    let outcome = session.exit(false);
    assert!(!outcome.passed);
    let record = drill.finish(LevelIndex::new(0), outcome).await;
    assert_eq!(record.unlocked_max(), LevelIndex::new(0));
    assert_eq!(repo.get(PROGRESS_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn failed_level_can_be_retried_over_the_same_order() {
    let repo = InMemoryRepository::new();
    let speech = Arc::new(RecordingSpeech::default());
    let drill = build_drill(&repo, speech.clone());

    let mut session = drill.start(LevelIndex::new(0)).await.unwrap();
    let first_word = session.current_item().unwrap().source().to_owned();
    while session.current_item().is_some() {
        drill.submit(&mut session, "wrong").unwrap();
    }
    assert!(!session.exit(false).passed);

    drill.restart(&mut session).unwrap();
    assert_eq!(session.position(), 0);
    assert_eq!(session.score().attempts, 0);
    assert_eq!(session.current_item().unwrap().source(), first_word);
    assert_eq!(speech.spoken.lock().unwrap().last().unwrap(), &first_word);
}

#[tokio::test]
async fn corrupt_progress_value_falls_back_to_the_default() {
    let repo = InMemoryRepository::new();
    repo.seed(PROGRESS_KEY, "not-a-number");
    let drill = build_drill(&repo, Arc::new(RecordingSpeech::default()));

    let (record, _) = drill.level_summaries().await;
    assert_eq!(record.unlocked_max(), LevelIndex::new(0));

    let err = drill.start(LevelIndex::new(1)).await.unwrap_err();
    assert!(matches!(err, services::DrillError::LevelLocked(_)));
}
