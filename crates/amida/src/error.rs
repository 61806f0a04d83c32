//! Error types for Amida operations.
//!
//! This module provides the main error type [`AmidaError`] which wraps
//! the error conditions of parsing, replaying and rendering a lottery.

use std::io;

use thiserror::Error;

use amida_core::LadderError;
use amida_parser::error::ParseError;

/// The main error type for Amida operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the script source next to its diagnostics so
/// that callers can render labelled snippets.
#[derive(Debug, Error)]
pub enum AmidaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Ladder error: {0}")]
    Ladder(#[from] LadderError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for AmidaError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl AmidaError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
