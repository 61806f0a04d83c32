use amida_core::geometry::Point;
use amida_core::script::Command;
use amida_core::session::Lottery;
use amida_parser::error::{ErrorCode, Severity};
use amida_parser::{Span, parse};

#[test]
fn test_simple_script() {
    let source = r#"
        # three players, two rungs
        lines 3
        rung 150 10
        rung 250 20
    "#;

    let script = parse(source).expect("Failed to parse");

    assert_eq!(
        script.commands(),
        &[
            Command::Lines(3),
            Command::Rung(Point::new(150.0, 10.0)),
            Command::Rung(Point::new(250.0, 20.0)),
        ]
    );
}

#[test]
fn test_parsed_script_replays_into_lottery() {
    let source = "lines 3\nrung 150 10\nrung 250 20\n";
    let script = parse(source).expect("Failed to parse");

    let mut lottery = Lottery::default();
    for command in script.commands() {
        match *command {
            Command::Lines(count) => lottery.new_lottery(count, 400.0).unwrap(),
            Command::Rung(click) => {
                lottery.add_rung(click);
            }
            Command::Undo => {
                lottery.remove_last_rung();
            }
            Command::Clear => lottery.clear_rungs(),
        }
    }

    assert_eq!(lottery.result().labels(), &[2, 3, 1]);
}

#[test]
fn test_windows_line_endings() {
    let script = parse("lines 2\r\nundo\r\n").expect("Failed to parse");
    assert_eq!(script.commands(), &[Command::Lines(2), Command::Undo]);
}

#[test]
fn test_comment_only_script_is_empty() {
    let script = parse("# nothing here\n\n# still nothing\n").expect("Failed to parse");
    assert!(script.is_empty());
}

#[test]
fn test_syntax_errors_reported_before_validation() {
    // `rung` before `lines` would fail validation, but the syntax error wins.
    let err = parse("rung 1 1\nlines three\n").unwrap_err();

    assert_eq!(err.diagnostics().len(), 1);
    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
}

#[test]
fn test_error_positions_index_into_source() {
    let source = "lines 4\nrung 10 20\nshuffle\n";
    let err = parse(source).unwrap_err();
    let diag = &err.diagnostics()[0];

    assert_eq!(diag.severity(), Severity::Error);
    assert_eq!(diag.code(), Some(ErrorCode::E001));

    let span = diag.labels()[0].span();
    assert_eq!(span, Span::new(19..26));
    assert_eq!(&source[span.start()..span.end()], "shuffle");
}

#[test]
fn test_error_display() {
    let err = parse("lines 0").unwrap_err();
    assert_eq!(
        err.to_string(),
        "error[E201]: a lottery needs at least one line"
    );
}
