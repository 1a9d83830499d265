// Error reporting with Ariadne
//
// Cell syntax errors, grid shape errors and readiness failures rendered
// against the input file.

use crate::grid::GridError;
use crate::validate::NotReadyReason;
use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::error::Simple;
use lexer::token::Token;
use std::ops::Range;

/// Type alias for Chumsky parser errors
pub type ParseError = Simple<Token>;

// Spans past the end of the file (end-of-input) are pulled back inside it
fn clamp(span: Range<usize>, source: &str) -> Range<usize> {
    let end = span.end.min(source.len());
    span.start.min(end)..end
}

/// Report errors from one cell. `offset` is where the cell text starts in
/// `source`, since cell errors carry spans relative to the cell.
pub fn report_errors(filename: &str, source: &str, offset: usize, errors: Vec<ParseError>) {
    for error in errors {
        let span = error.span();
        let span = clamp(offset + span.start..offset + span.end, source);
        let msg = format!("{}", error);

        let report = Report::build(ReportKind::Error, filename, span.start)
            .with_code("E001")
            .with_message("Invalid cell")
            .with_label(
                Label::new((filename, span))
                    .with_message(msg)
                    .with_color(Color::Red),
            );

        let report = if error.expected().len() > 0 {
            let expected: Vec<String> = error.expected().map(format_expected).collect();
            report.with_help(format!("Expected: {}", expected.join(", ")))
        } else {
            report
        };

        let _ = report.finish().eprint((filename, Source::from(source)));
    }
}

/// Format expected token for human-readable output
fn format_expected(token: &Option<Token>) -> String {
    match token {
        Some(Token::Number(_)) => "number".to_string(),
        Some(Token::Minus) => "'-'".to_string(),
        Some(Token::Plus) => "'+'".to_string(),
        Some(Token::Slash) => "'/'".to_string(),
        Some(Token::Dot) => "'.'".to_string(),
        None => "end of cell".to_string(),
    }
}

/// Report row-shape problems found while reading the grid
pub fn report_grid_errors(filename: &str, source: &str, errors: &[GridError]) {
    for error in errors {
        let span = clamp(error.span().unwrap_or(0..0), source);

        let report = Report::build(ReportKind::Error, filename, span.start)
            .with_code("E002")
            .with_message(error.to_string());

        let report = match error {
            GridError::Empty => {
                report.with_help("write one equation per line, e.g. `2 1 | 5`")
            }
            GridError::RaggedRow { expected, .. } => report.with_label(
                Label::new((filename, span))
                    .with_message(format!("every row needs {} cells", expected))
                    .with_color(Color::Red),
            ),
            GridError::MisplacedBar { .. } => report.with_label(
                Label::new((filename, span))
                    .with_message("only the right-hand side may follow '|'")
                    .with_color(Color::Red),
            ),
        };

        let _ = report.finish().eprint((filename, Source::from(source)));
    }
}

/// Warn about the first cell that keeps the matrix from being ready
pub fn report_not_ready(
    filename: &str,
    source: &str,
    span: Range<usize>,
    row: usize,
    col: usize,
    reason: &NotReadyReason,
) {
    let span = clamp(span, source);
    let _ = Report::build(ReportKind::Warning, filename, span.start)
        .with_code("W001")
        .with_message(format!("Matrix not ready: row {}, col {}", row, col))
        .with_label(
            Label::new((filename, span))
                .with_message(reason.to_string())
                .with_color(Color::Yellow),
        )
        .finish()
        .eprint((filename, Source::from(source)));
}
