//! # Amida Parser
//!
//! Parser for Amida lottery scripts. A script is a line-oriented record of
//! the interactions that build a lottery:
//!
//! ```text
//! # three players
//! lines 3
//! rung 30 120     # click between the first two lines
//! rung 70 180
//! undo
//! clear
//! ```
//!
//! ## Usage
//!
//! ```
//! # use amida_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let script = parse("lines 3\nrung 30 120\n")?;
//!     assert_eq!(script.len(), 2);
//!     Ok(())
//! }
//! ```

pub mod error;

mod parser;
mod span;
mod validate;

pub use span::{Span, Spanned};

use log::{debug, info};

use amida_core::script::Script;

use error::ParseError;

/// Parse script source into a [`Script`].
///
/// The pipeline has two steps:
///
/// 1. **Parse** - Scan each line and read it as a command
/// 2. **Validate** - Check that the commands make sense in order
///
/// Every diagnostic a step produces is returned together, so a script with
/// several broken lines reports all of them. Warnings of a successful parse
/// are logged.
///
/// # Example
///
/// ```
/// # use amida_parser::parse;
/// let err = parse("lines 3\njump 2\nrung 10\n").unwrap_err();
/// assert_eq!(err.diagnostics().len(), 2);
/// ```
pub fn parse(source: &str) -> Result<Script, ParseError> {
    info!(bytes = source.len(); "Parsing script");

    let commands = parser::parse_commands(source)?;
    debug!(commands = commands.len(); "Script parsed");

    validate::validate_commands(&commands)?;

    Ok(commands
        .into_iter()
        .map(parser::ParsedCommand::into_command)
        .collect())
}
