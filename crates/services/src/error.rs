//! Shared error types for the services crate.
//!
//! Progress persistence deliberately has no error surface here: the
//! store's failures are recovered inside `ProgressService` (defaults and
//! logs) and never reach the learner.

use thiserror::Error;

use shabda_core::model::LevelIndex;
use shabda_core::session::SessionError;

/// Errors emitted by `DrillService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DrillError {
    #[error("no level at index {0}")]
    UnknownLevel(LevelIndex),
    #[error("level {0} is still locked")]
    LevelLocked(LevelIndex),
    #[error(transparent)]
    Session(#[from] SessionError),
}
