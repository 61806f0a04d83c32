//! Ordering checks over a parsed script.
//!
//! Commands that parse cleanly can still be meaningless in sequence: a rung
//! cannot be placed before any ladder exists and a ladder needs at least one
//! line.

use amida_core::script::Command;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    parser::ParsedCommand,
};

/// Validate command ordering, reporting every problem at once.
pub(crate) fn validate_commands(commands: &[ParsedCommand]) -> Result<(), ParseError> {
    let mut collector = DiagnosticCollector::new();
    let mut generated = false;

    for parsed in commands {
        match parsed.command().inner() {
            Command::Lines(0) => {
                let span = parsed.arguments().first().copied().unwrap_or(parsed.keyword());
                collector.emit(
                    Diagnostic::error("a lottery needs at least one line")
                        .with_code(ErrorCode::E201)
                        .with_label(span, "zero lines requested")
                        .with_help("use a positive count, e.g. `lines 5`"),
                );
            }
            Command::Lines(_) => generated = true,
            Command::Rung(_) if !generated => {
                collector.emit(
                    Diagnostic::error("rung placed before any lines exist")
                        .with_code(ErrorCode::E200)
                        .with_label(parsed.command().span(), "no ladder to place this rung on")
                        .with_help("generate the ladder first with `lines <count>`"),
                );
            }
            command @ (Command::Undo | Command::Clear) if !generated => {
                let keyword = match command {
                    Command::Undo => "undo",
                    _ => "clear",
                };
                collector.emit(
                    Diagnostic::warning(format!("`{keyword}` has no effect before `lines`"))
                        .with_label(parsed.keyword(), "nothing to remove yet"),
                );
            }
            Command::Rung(_) | Command::Undo | Command::Clear => {}
        }
    }

    collector.finish()
}
