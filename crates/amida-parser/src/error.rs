//! Error and diagnostic system for the Amida script parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, multiple source
//! locations, and help text. Multiple diagnostics are wrapped in [`ParseError`]
//! so that every broken line of a script is reported in one pass.
//!
//! # Example
//!
//! ```
//! # use amida_parser::error::{Diagnostic, ErrorCode};
//! # use amida_parser::Span;
//!
//! let diag = Diagnostic::error("unknown command `rungs`")
//!     .with_code(ErrorCode::E001)
//!     .with_label(Span::new(0..5), "not a command")
//!     .with_help("expected one of `lines`, `rung`, `undo`, `clear`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
