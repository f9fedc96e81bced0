//! Speech capability seam.
//!
//! The session engine emits speak commands; a `SpeechAdapter` executes
//! them against whatever backend the platform offers. The capability is
//! optional by design: a missing backend degrades to silence, never to an
//! error the learner sees.

use std::sync::Arc;

use log::debug;

use shabda_core::session::SessionCommand;

/// Voice lookup preference, best first: Sanskrit itself, then related
/// Indic language tags (Sanskrit voices are rare in TTS engines), then
/// whatever voice exists.
pub const LANG_PREFERENCE: [&str; 5] = ["sa", "hi", "mr", "ne", "bn"];

/// One vocalization request.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Utterance {
    /// Slightly slowed speech, easier to learn from.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rate: 0.95,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// Fire-and-forget vocalization backend.
///
/// `speak` reports whether a request was issued, not whether audio
/// played; a new request supersedes any in-flight one.
pub trait SpeechAdapter: Send + Sync {
    fn speak(&self, utterance: &Utterance) -> bool;
}

/// Adapter for runtimes without a speech capability. Never errors,
/// never speaks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSpeech;

impl SpeechAdapter for NullSpeech {
    fn speak(&self, _utterance: &Utterance) -> bool {
        false
    }
}

/// Routes engine-emitted commands to the configured adapter.
#[derive(Clone)]
pub struct SpeechDispatcher {
    adapter: Arc<dyn SpeechAdapter>,
}

impl SpeechDispatcher {
    #[must_use]
    pub fn new(adapter: Arc<dyn SpeechAdapter>) -> Self {
        Self { adapter }
    }

    /// Dispatcher that swallows every request.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Arc::new(NullSpeech))
    }

    /// Executes a single command. A dropped request is logged and
    /// otherwise ignored; vocalization failure must never stall a
    /// session.
    pub fn dispatch(&self, command: &SessionCommand) {
        match command {
            SessionCommand::Speak { text } => {
                let issued = self.adapter.speak(&Utterance::new(text.clone()));
                if !issued {
                    debug!("speech request for {text:?} was not issued");
                }
            }
        }
    }

    /// Executes a batch of commands in order.
    pub fn dispatch_all<'a>(&self, commands: impl IntoIterator<Item = &'a SessionCommand>) {
        for command in commands {
            self.dispatch(command);
        }
    }
}
