//! Error types for setup and input handling

use thiserror::Error;

use crate::options::OptionsError;

/// Errors that abort a run before or outside of normal play.
///
/// A game over is not an error: see [`crate::Outcome`].
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Unfortunately, you are not old enough to adopt or buy a dog! (age {age})")]
    AgeIneligible { age: i32 },

    #[error("input stream closed while waiting for an answer")]
    InputClosed,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("answer outside the prompt's contract: {0}")]
    Input(#[from] InputError),

    #[error(transparent)]
    Options(#[from] OptionsError),
}

impl GameError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            GameError::AgeIneligible { .. } => 2,
            GameError::InputClosed | GameError::Io(_) | GameError::Input(_) => 74,
            GameError::Options(_) => 78,
        }
    }
}

/// A rejected answer at a prompt. Recovered by asking again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i32, min: i32, max: i32 },

    #[error("answer is not valid UTF-8")]
    NotText,
}
