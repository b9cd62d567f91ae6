//! Error types for prompt-include.
//!
//! These are the hard failures that stop a command. Directive failures inside
//! a template are never represented here: they are rendered inline by the
//! expansion engine (see [`crate::expand::DirectiveError`]).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for prompt-include operations.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Invalid arguments, configuration, or input documents.
    #[error("{0}")]
    UserError(String),

    /// The environment could not be read (working directory, stdin).
    #[error("I/O failure: {0}")]
    IoError(String),

    /// Strict mode: expansion completed but rendered inline error markers.
    #[error("expansion produced {0} inline error(s)")]
    ExpansionErrors(usize),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::UserError(_) => exit_codes::USER_ERROR,
            PromptError::IoError(_) => exit_codes::IO_FAILURE,
            PromptError::ExpansionErrors(_) => exit_codes::EXPANSION_ERRORS,
        }
    }
}

/// Result type alias for prompt-include operations.
pub type Result<T> = std::result::Result<T, PromptError>;
