// Error reporting with Ariadne for input errors
//
// The engine only knows 1-based cell coordinates; the caller maps them back
// to byte spans in whatever text the grid came from.

use crate::error::InputError;
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::ops::Range;

/// Format an InputError as an Ariadne report on stderr.
///
/// `locate(row, col)` takes 1-based coordinates and returns the cell's span
/// in `source`, if known.
pub fn report_input_error<F>(filename: &str, source: &str, error: &InputError, locate: F)
where
    F: Fn(usize, usize) -> Option<Range<usize>>,
{
    let (span, label, help) = match error {
        InputError::InvalidCell { row, col, text } => (
            locate(*row, *col),
            Some(format!("'{}' is not a number", text)),
            Some("use a decimal like -2.5 or a fraction like 3/4 with a non-zero denominator".to_string()),
        ),
        InputError::EmptyMatrix => (None, None, Some("write one equation per line".to_string())),
        InputError::TooFewColumns { .. } => (
            None,
            None,
            Some("the last column of every row is the right-hand side".to_string()),
        ),
        InputError::RaggedRow { row, .. } => (locate(*row, 1), None, None),
        InputError::DimensionOutOfRange { .. } => (None, None, None),
    };

    let span = span.map(|s| s.start.min(source.len())..s.end.min(source.len()));
    let report = Report::build(
        ReportKind::Error,
        filename,
        span.as_ref().map(|s| s.start).unwrap_or(0),
    )
    .with_code(format!("E{}", error.exit_code()))
    .with_message(format!("Input Error: {}", error));

    let report = match help {
        Some(help) => report.with_help(help),
        None => report,
    };

    let report = if let Some(span) = span {
        report.with_label(
            Label::new((filename, span))
                .with_message(label.unwrap_or_else(|| error.to_string()))
                .with_color(Color::Red),
        )
    } else {
        report
    };

    let _ = report.finish().eprint((filename, Source::from(source)));
}
