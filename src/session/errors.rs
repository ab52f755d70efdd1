//! User-facing command errors
//!
//! This module defines [`CommandError`], every reason a command can be
//! rejected. A rejected command never changes session state; the message is
//! shown on the status line and the user can simply try again.

use crate::run::constants::{MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use crate::structures::StructureError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Capacity errors from a bounded structure
    #[error(transparent)]
    Structure(#[from] StructureError),

    /// A value was required but none was given
    #[error("Please enter a value")]
    MissingValue,

    /// A numeric argument did not parse
    #[error("Please enter a valid number ('{input}' is not one)")]
    InvalidNumber { input: String },

    /// Requested array size outside the supported range
    #[error(
        "Please enter array size between {} and {} (got {size})",
        MIN_ARRAY_SIZE,
        MAX_ARRAY_SIZE
    )]
    ArraySizeOutOfRange { size: i64 },

    /// A sub-command or argument is missing
    #[error("'{command}' expects {expected}")]
    MissingArgument { command: String, expected: String },

    /// The first word is not a known command
    #[error("Unknown command: {input}")]
    UnknownCommand { input: String },

    /// Search or removal target absent from a structure
    #[error("{value} not found in {structure}")]
    NotFound {
        structure: &'static str,
        value: String,
    },
}
