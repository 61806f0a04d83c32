//! Adapters rendering [`AmidaError`] through miette.
//!
//! Script diagnostics become one report each, with labelled snippets of the
//! script. Every other error becomes a single report without source.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use amida::AmidaError;
use amida_parser::error::{Diagnostic, Severity};

/// Adapter for a single script diagnostic.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.diag.severity() {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        // Fall back to the meaning of the code when no help text was given.
        let help = self
            .diag
            .help()
            .or_else(|| self.diag.code().map(|code| code.description()))?;
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for [`AmidaError`] variants without source locations.
pub struct ErrorAdapter<'a>(pub &'a AmidaError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            AmidaError::Io(_) => "amida::io",
            AmidaError::Parse { .. } => return None,
            AmidaError::Ladder(_) => "amida::ladder",
            AmidaError::Config(_) => "amida::config",
            AmidaError::Export(_) => "amida::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            AmidaError::Ladder(_) => "check the canvas width and the `lines` counts",
            AmidaError::Config(_) => "see `[canvas]` and `[style]` in the configuration",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a single diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn severity(&self) -> Option<miette::Severity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

fn span_to_miette(span: amida_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert an [`AmidaError`] into one [`Reportable`] per diagnostic, or a
/// single [`Reportable`] for errors without diagnostics.
pub fn to_reportables(err: &AmidaError) -> Vec<Reportable<'_>> {
    match err {
        AmidaError::Parse {
            err: parse_err,
            src,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use amida::LadderError;
    use amida_parser::{
        Span,
        error::{ErrorCode, ParseError},
    };

    use super::*;

    fn parse_error(source: &str) -> AmidaError {
        let err = amida_parser::parse(source).unwrap_err();
        AmidaError::new_parse_error(err, source)
    }

    #[test]
    fn test_one_reportable_per_diagnostic() {
        let err = parse_error("lines 3
jump
rung 1
");

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[0].to_string(), "unknown command `jump`");
        assert_eq!(
            reportables[1].to_string(),
            "`rung` is missing its y coordinate"
        );
        assert_eq!(
            reportables[0].code().map(|code| code.to_string()),
            Some("E001".to_string())
        );
    }

    #[test]
    fn test_diagnostic_carries_source_and_help() {
        let source = "lines 0";
        let err = parse_error(source);

        let reportables = to_reportables(&err);
        let reportable = &reportables[0];

        assert!(reportable.source_code().is_some());
        assert!(reportable.help().is_some());
        let labels: Vec<_> = reportable.labels().unwrap().collect();
        assert_eq!(labels[0].offset(), 6);
        assert_eq!(labels[0].len(), 1);
    }

    #[test]
    fn test_warning_severity_is_kept() {
        let diag = Diagnostic::warning("`undo` has no effect before `lines`")
            .with_label(Span::new(0..4), "nothing to remove yet");
        let adapter = DiagnosticAdapter::new(&diag, "undo");

        assert_eq!(adapter.severity(), Some(miette::Severity::Warning));
    }

    #[test]
    fn test_non_parse_error() {
        let err = AmidaError::Config("Missing configuration file: x.toml".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(
                    e.to_string(),
                    "Configuration error: Missing configuration file: x.toml"
                );
                assert_eq!(
                    e.code().map(|code| code.to_string()),
                    Some("amida::config".to_string())
                );
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_ladder_error_has_help() {
        let err = AmidaError::Ladder(LadderError::InvalidLineCount { count: 0 });

        let reportables = to_reportables(&err);
        assert!(reportables[0].help().is_some());
        assert!(reportables[0].labels().is_none());
    }

    #[test]
    fn test_help_falls_back_to_code_description() {
        let diag = Diagnostic::error("`lines` count must be a whole number")
            .with_code(ErrorCode::E100)
            .with_label(Span::new(6..9), "not a count");
        let adapter = DiagnosticAdapter::new(&diag, "lines abc");

        assert_eq!(
            adapter.help().map(|help| help.to_string()),
            Some("invalid argument".to_string())
        );

        let uncoded = Diagnostic::warning("`undo` has no effect before `lines`");
        assert!(DiagnosticAdapter::new(&uncoded, "undo").help().is_none());
    }

    #[test]
    fn test_primary_flag_on_labels() {
        let diag = Diagnostic::error("`rung` is missing its y coordinate")
            .with_code(ErrorCode::E101)
            .with_label(Span::new(8..8), "y coordinate expected here")
            .with_secondary_label(Span::new(0..4), "command started here");
        let err = AmidaError::new_parse_error(ParseError::from(diag), "rung 120");

        let reportables = to_reportables(&err);
        let labels: Vec<_> = reportables[0].labels().unwrap().collect();

        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
    }
}
