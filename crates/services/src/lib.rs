#![forbid(unsafe_code)]

pub mod drill_service;
pub mod error;
pub mod progress_service;
pub mod session_setup;
pub mod speech;

pub use shabda_core::Clock;

pub use drill_service::{DrillService, LevelSummary};
pub use error::DrillError;
pub use progress_service::{PROGRESS_KEY, ProgressService};
pub use session_setup::build_session;
pub use speech::{LANG_PREFERENCE, NullSpeech, SpeechAdapter, SpeechDispatcher, Utterance};
