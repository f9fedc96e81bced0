use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::answer::answers_match;
use crate::model::VocabItem;

/// Score percentage required to pass a level.
pub const PASS_THRESHOLD_PCT: u8 = 80;

/// Number of recent answers kept for the review display.
pub const HISTORY_CAP: usize = 5;

const FEEDBACK_CLEAR_CORRECT: Duration = Duration::from_millis(800);
const FEEDBACK_CLEAR_INCORRECT: Duration = Duration::from_millis(1800);

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session is already finished")]
    Finished,
    #[error("session is still in progress")]
    NotFinished,
    #[error("session was passed; retry is only offered after a fail")]
    AlreadyPassed,
}

//
// ─── STATES, COMMANDS, PAYLOADS ────────────────────────────────────────────────
//

/// Observable state of a quiz session.
///
/// `AwaitingInput` and `ShowingFeedback` are both active; feedback is a
/// presentation overlay and never blocks the next submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    ShowingFeedback,
    Finished,
}

/// Side effect requested by a transition. The engine only emits these;
/// an adapter outside the core executes them, fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Speak { text: String },
}

/// Presentation payload for the result of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    was_correct: bool,
    expected: Option<String>,
}

impl Feedback {
    #[must_use]
    pub fn was_correct(&self) -> bool {
        self.was_correct
    }

    /// The correct meaning, present only when the guess was wrong.
    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// How long the feedback stays on screen before auto-clearing.
    /// Purely a presentation delay; scoring state never depends on it.
    #[must_use]
    pub fn clear_after(&self) -> Duration {
        if self.was_correct {
            FEEDBACK_CLEAR_CORRECT
        } else {
            FEEDBACK_CLEAR_INCORRECT
        }
    }
}

/// One remembered submission, most recent first in the session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub item: VocabItem,
    pub raw_guess: String,
    pub was_correct: bool,
}

/// Running score of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionScore {
    pub correct: u32,
    pub attempts: u32,
}

impl SessionScore {
    /// Rounded percentage of correct submissions; 0 when nothing was
    /// attempted.
    #[must_use]
    pub fn pct(&self) -> u8 {
        if self.attempts == 0 {
            return 0;
        }
        let pct = (f64::from(self.correct) * 100.0 / f64::from(self.attempts)).round();
        pct as u8
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.pct() >= PASS_THRESHOLD_PCT
    }
}

/// Terminal result reported back to the menu shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub passed: bool,
}

/// What a single `submit` produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub feedback: Feedback,
    pub finished: bool,
    pub commands: Vec<SessionCommand>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One play-through of a single level, from shuffled order to terminal
/// result.
///
/// The session owns its state exclusively. `order` is fixed at start and
/// never reshuffled; a retry after a fail replays the identical order.
pub struct QuizSession {
    order: Vec<VocabItem>,
    position: usize,
    correct: u32,
    attempts: u32,
    history: Vec<HistoryEntry>,
    feedback: Option<Feedback>,
}

impl QuizSession {
    /// Creates a session over an already deduplicated, already shuffled
    /// item order.
    ///
    /// An empty order is an edge condition, not an error: the session
    /// starts directly in `Finished` with zero attempts and a failing
    /// score.
    #[must_use]
    pub fn new(order: Vec<VocabItem>) -> Self {
        Self {
            order,
            position: 0,
            correct: 0,
            attempts: 0,
            history: Vec::new(),
            feedback: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.position >= self.order.len() {
            SessionState::Finished
        } else if self.feedback.is_some() {
            SessionState::ShowingFeedback
        } else {
            SessionState::AwaitingInput
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state() == SessionState::Finished
    }

    /// Index of the item currently awaiting an answer. Never exceeds
    /// `len()`; equal to `len()` exactly when finished.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of items in this session's order.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&VocabItem> {
        self.order.get(self.position)
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> SessionScore {
        SessionScore {
            correct: self.correct,
            attempts: self.attempts,
        }
    }

    /// How far through the order the learner is, as a rounded percentage.
    #[must_use]
    pub fn progress_pct(&self) -> u8 {
        if self.order.is_empty() {
            return 100;
        }
        let pct = (self.position as f64 * 100.0 / self.order.len() as f64).round();
        pct as u8
    }

    /// The speak request for the current item, emitted on session start
    /// and after every advance while active.
    #[must_use]
    pub fn speak_command(&self) -> Option<SessionCommand> {
        self.current_item().map(|item| SessionCommand::Speak {
            text: item.source().to_owned(),
        })
    }

    /// Evaluates one submission against the current item.
    ///
    /// Attempts always increment; correct increments iff the normalized
    /// guess equals the normalized meaning. The submission is prepended
    /// to the bounded history, the feedback payload replaces any feedback
    /// still on screen, and the session advances (finishing after the
    /// last item). Arbitrary text is always a valid, if possibly
    /// incorrect, answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` when all items are already
    /// consumed.
    pub fn submit(&mut self, raw_guess: &str) -> Result<Submission, SessionError> {
        let Some(item) = self.order.get(self.position).cloned() else {
            return Err(SessionError::Finished);
        };

        let was_correct = answers_match(raw_guess, item.meaning());
        self.attempts += 1;
        if was_correct {
            self.correct += 1;
        }

        self.history.insert(
            0,
            HistoryEntry {
                item: item.clone(),
                raw_guess: raw_guess.to_owned(),
                was_correct,
            },
        );
        self.history.truncate(HISTORY_CAP);

        let feedback = Feedback {
            was_correct,
            expected: (!was_correct).then(|| item.meaning().to_owned()),
        };
        self.feedback = Some(feedback.clone());

        self.position += 1;
        let commands = self.speak_command().into_iter().collect();

        Ok(Submission {
            feedback,
            finished: self.is_finished(),
            commands,
        })
    }

    /// Removes the feedback overlay. Called by the presentation timer;
    /// touches nothing else.
    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    /// Resets the session for another try at the same level, re-using the
    /// original order without reshuffling.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` while items remain, and
    /// `SessionError::AlreadyPassed` when the finished session passed
    /// (a passed level is left, not retried).
    pub fn restart(&mut self) -> Result<Vec<SessionCommand>, SessionError> {
        if !self.is_finished() {
            return Err(SessionError::NotFinished);
        }
        if self.score().passed() {
            return Err(SessionError::AlreadyPassed);
        }

        self.position = 0;
        self.correct = 0;
        self.attempts = 0;
        self.history.clear();
        self.feedback = None;

        Ok(self.speak_command().into_iter().collect())
    }

    /// Terminates the session and reports the result.
    ///
    /// Forced exits and exits before `Finished` always report a fail;
    /// otherwise the final score decides.
    #[must_use]
    pub fn exit(&self, force_fail: bool) -> SessionOutcome {
        let passed = !force_fail && self.is_finished() && self.score().passed();
        SessionOutcome { passed }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("order_len", &self.order.len())
            .field("position", &self.position)
            .field("correct", &self.correct)
            .field("attempts", &self.attempts)
            .field("history_len", &self.history.len())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
