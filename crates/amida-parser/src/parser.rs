//! Line scanner and command parser for lottery scripts.
//!
//! Each source line is scanned into whitespace-separated words with
//! [`winnow`], then the first word selects the command and the rest are read
//! as its arguments. A broken line produces a diagnostic and parsing carries
//! on with the next line, so one pass reports every problem in the script.

use winnow::{
    Parser as _,
    ascii::{dec_uint, float, space0},
    combinator::{opt, preceded, repeat, terminated},
    error::{ContextError, ModalResult},
    stream::LocatingSlice,
    token::take_while,
};

use amida_core::{geometry::Point, script::Command};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::{Span, Spanned},
};

type Input<'src> = LocatingSlice<&'src str>;
type IResult<O> = ModalResult<O, ContextError>;

const COMMANDS_HELP: &str = "expected one of `lines`, `rung`, `undo`, `clear`";

/// A whitespace-separated word of a script line.
#[derive(Debug, Clone, Copy)]
struct Word<'src> {
    text: &'src str,
    span: Span,
}

impl Word<'_> {
    fn offset_by(self, offset: usize) -> Self {
        Self {
            span: self.span.offset_by(offset),
            ..self
        }
    }
}

/// A command together with the source locations of its parts.
#[derive(Debug, Clone)]
pub(crate) struct ParsedCommand {
    command: Spanned<Command>,
    keyword: Span,
    arguments: Vec<Span>,
}

impl ParsedCommand {
    pub(crate) fn command(&self) -> &Spanned<Command> {
        &self.command
    }

    pub(crate) fn keyword(&self) -> Span {
        self.keyword
    }

    pub(crate) fn arguments(&self) -> &[Span] {
        &self.arguments
    }

    pub(crate) fn into_command(self) -> Command {
        self.command.into_inner()
    }
}

/// Parse a single word: a run of characters up to whitespace or `#`
fn word<'src>(input: &mut Input<'src>) -> IResult<Word<'src>> {
    take_while(1.., |c: char| !c.is_whitespace() && c != '#')
        .with_span()
        .map(|(text, range)| Word {
            text,
            span: Span::new(range),
        })
        .parse_next(input)
}

/// Parse a `#` comment running to the end of the line
fn comment<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    preceded('#', take_while(0.., |_: char| true)).parse_next(input)
}

/// Parse every word of a line, ignoring surrounding blanks and a trailing comment
fn line_words<'src>(input: &mut Input<'src>) -> IResult<Vec<Word<'src>>> {
    terminated(
        preceded(space0, repeat(0.., terminated(word, space0))),
        opt(comment),
    )
    .parse_next(input)
}

/// Split `source` into lines without their terminators, paired with the
/// byte offset each line starts at.
fn source_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source.split_inclusive('\n').scan(0, |offset, raw| {
        let start = *offset;
        *offset += raw.len();
        Some((start, raw.trim_end_matches(['\n', '\r'])))
    })
}

/// Parse script source into commands, keeping their source spans.
pub(crate) fn parse_commands(source: &str) -> Result<Vec<ParsedCommand>, ParseError> {
    let mut collector = DiagnosticCollector::new();
    let mut commands = Vec::new();

    for (offset, text) in source_lines(source) {
        let words = match line_words.parse(LocatingSlice::new(text)) {
            Ok(words) => words,
            Err(err) => {
                let at = err.offset();
                let width = text[at..].chars().next().map_or(1, char::len_utf8);
                let span = Span::new(at..at + width).offset_by(offset);
                collector.emit(
                    Diagnostic::error("unexpected character")
                        .with_code(ErrorCode::E002)
                        .with_label(span, "cannot appear in a script line")
                        .with_help("separate words with spaces or tabs"),
                );
                continue;
            }
        };

        let words: Vec<Word<'_>> = words.into_iter().map(|w| w.offset_by(offset)).collect();
        if let Some(command) = parse_line(&words, &mut collector) {
            commands.push(command);
        }
    }

    collector.finish()?;
    Ok(commands)
}

/// Parse the words of one line into a command, reporting problems to `collector`.
///
/// Returns `None` for blank lines and for lines with errors.
fn parse_line(words: &[Word<'_>], collector: &mut DiagnosticCollector) -> Option<ParsedCommand> {
    let (keyword, arguments) = words.split_first()?;

    let command = match keyword.text {
        "lines" => {
            let [count] = expect_arguments(keyword, arguments, ["line count"], collector)?;
            Command::Lines(line_count(count, collector)?)
        }
        "rung" => {
            let [x, y] = expect_arguments(
                keyword,
                arguments,
                ["x coordinate", "y coordinate"],
                collector,
            )?;
            let x = coordinate(x, collector);
            let y = coordinate(y, collector);
            Command::Rung(Point::new(x?, y?))
        }
        "undo" => {
            let [] = expect_arguments(keyword, arguments, [], collector)?;
            Command::Undo
        }
        "clear" => {
            let [] = expect_arguments(keyword, arguments, [], collector)?;
            Command::Clear
        }
        other => {
            collector.emit(
                Diagnostic::error(format!("unknown command `{other}`"))
                    .with_code(ErrorCode::E001)
                    .with_label(keyword.span, "not a command")
                    .with_help(COMMANDS_HELP),
            );
            return None;
        }
    };

    let span = arguments
        .iter()
        .fold(keyword.span, |span, argument| span.union(argument.span));

    Some(ParsedCommand {
        command: Spanned::new(command, span),
        keyword: keyword.span,
        arguments: arguments.iter().map(|argument| argument.span).collect(),
    })
}

/// Usage line shown in help texts for a command keyword.
fn usage(keyword: &str) -> &'static str {
    match keyword {
        "lines" => "lines <count>",
        "rung" => "rung <x> <y>",
        "undo" => "undo",
        _ => "clear",
    }
}

/// Check that a command got exactly `N` arguments, named by `names`.
fn expect_arguments<'src, const N: usize>(
    keyword: &Word<'src>,
    arguments: &[Word<'src>],
    names: [&str; N],
    collector: &mut DiagnosticCollector,
) -> Option<[Word<'src>; N]> {
    if let Some(missing) = names.get(arguments.len()) {
        let end = arguments.last().unwrap_or(keyword).span.end();
        collector.emit(
            Diagnostic::error(format!("`{}` is missing its {missing}", keyword.text))
                .with_code(ErrorCode::E101)
                .with_label(Span::new(end..end), format!("{missing} expected here"))
                .with_secondary_label(keyword.span, "command started here")
                .with_help(format!("usage: `{}`", usage(keyword.text))),
        );
        return None;
    }

    if arguments.len() > N {
        let extra = arguments[N..]
            .iter()
            .map(|argument| argument.span)
            .reduce(|span, next| span.union(next))
            .unwrap_or(keyword.span);
        collector.emit(
            Diagnostic::error(format!(
                "`{}` takes {N} argument(s) but {} were given",
                keyword.text,
                arguments.len()
            ))
            .with_code(ErrorCode::E102)
            .with_label(extra, "unexpected argument")
            .with_help(format!("usage: `{}`", usage(keyword.text))),
        );
        return None;
    }

    <[Word<'src>; N]>::try_from(arguments).ok()
}

/// Read a line count argument.
fn line_count(word: Word<'_>, collector: &mut DiagnosticCollector) -> Option<usize> {
    match dec_uint::<_, usize, ContextError>.parse(word.text) {
        Ok(count) => Some(count),
        Err(_) => {
            collector.emit(
                Diagnostic::error(format!("invalid line count `{}`", word.text))
                    .with_code(ErrorCode::E100)
                    .with_label(word.span, "not a whole number")
                    .with_help("use a positive integer, e.g. `lines 5`"),
            );
            None
        }
    }
}

/// Read a finite click coordinate argument.
fn coordinate(word: Word<'_>, collector: &mut DiagnosticCollector) -> Option<f32> {
    match float::<_, f32, ContextError>.parse(word.text) {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            collector.emit(
                Diagnostic::error(format!("invalid coordinate `{}`", word.text))
                    .with_code(ErrorCode::E100)
                    .with_label(word.span, "not a finite number")
                    .with_help("use a decimal number, e.g. `rung 120.5 80`"),
            );
            None
        }
    }
}
