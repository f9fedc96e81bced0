use thiserror::Error;

use crate::model::{LevelError, VocabItemError};
use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Item(#[from] VocabItemError),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
