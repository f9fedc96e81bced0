use dioxus::prelude::*;

use services::DrillError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Locked,
    UnknownLevel,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::Locked => "That level is still locked. Pass the previous one first.",
            ViewError::UnknownLevel => "There is no such level.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<DrillError> for ViewError {
    fn from(err: DrillError) -> Self {
        match err {
            DrillError::LevelLocked(_) => ViewError::Locked,
            DrillError::UnknownLevel(_) => ViewError::UnknownLevel,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
