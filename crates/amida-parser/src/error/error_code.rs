//! Error codes for the Amida script diagnostics.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Line scanning errors
//! - `E1xx` - Command argument errors
//! - `E2xx` - Script validation errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Scanning Errors (E0xx)
    // =========================================================================
    /// Unknown command.
    ///
    /// The first word of a line is not one of `lines`, `rung`, `undo`, `clear`.
    E001,

    /// Unexpected character.
    ///
    /// A character was encountered that cannot start or continue a word.
    E002,

    // =========================================================================
    // Argument Errors (E1xx)
    // =========================================================================
    /// Invalid argument.
    ///
    /// An argument could not be read as the number the command expects.
    E100,

    /// Missing argument.
    ///
    /// The line ended before every argument of the command was given.
    E101,

    /// Unexpected argument.
    ///
    /// The command was given more arguments than it takes.
    E102,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Rung before lines.
    ///
    /// A `rung` was placed before any `lines` command generated a ladder.
    E200,

    /// Empty lottery.
    ///
    /// `lines 0` was requested; a lottery needs at least one line.
    E201,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unknown command",
            ErrorCode::E002 => "unexpected character",
            ErrorCode::E100 => "invalid argument",
            ErrorCode::E101 => "missing argument",
            ErrorCode::E102 => "unexpected argument",
            ErrorCode::E200 => "rung before lines",
            ErrorCode::E201 => "empty lottery",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
