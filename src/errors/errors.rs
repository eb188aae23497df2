use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InputUnavailable { .. } => "InputUnavailable",
            ErrorImpl::PromptFailed { .. } => "PromptFailed",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InputUnavailable { path, reason } => {
                ErrorTip::Suggestion(format!("Failed to open file '{}': {}", path, reason))
            }
            ErrorImpl::PromptFailed { reason } => {
                ErrorTip::Suggestion(format!("Could not read a file name from stdin: {}", reason))
            }
            ErrorImpl::UnrecognisedCharacter { character } => {
                ErrorTip::Suggestion(format!("Unrecognised character `{}`", character))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("failed to open file {path:?}: {reason}")]
    InputUnavailable { path: String, reason: String },
    #[error("failed to read file name: {reason}")]
    PromptFailed { reason: String },
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
}
