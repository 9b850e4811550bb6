//! Errors in the library.
use crate::Action;
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum TabrlError {
    /// An action outside the declared action set was passed to
    /// [`Mdp::step`](crate::Mdp::step).
    #[error("`{0}` is not a valid action")]
    InvalidAction(Action),

    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),
}
