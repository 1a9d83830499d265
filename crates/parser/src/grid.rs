// Grid reader
//
// Turns a text file into a rectangular grid of raw cell strings.
// One matrix row per line; cells are separated by whitespace, commas, or a
// single '|' in front of the right-hand side. '#' starts a comment.
// Cell text is not interpreted here; that is the cell parser's job.

use std::ops::Range;
use thiserror::Error;

/// Raw text of one cell plus its byte range in the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub text: String,
    pub span: Range<usize>,
}

/// Rows of raw cells, all the same length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    rows: Vec<Vec<GridCell>>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("input contains no matrix rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
        span: Range<usize>,
    },

    #[error("'|' in row {row} must come right before the last cell")]
    MisplacedBar { row: usize, span: Range<usize> },
}

impl GridError {
    /// Used by the CLI as its process exit code
    pub fn exit_code(&self) -> i32 {
        2
    }

    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            GridError::Empty => None,
            GridError::RaggedRow { span, .. } | GridError::MisplacedBar { span, .. } => {
                Some(span.clone())
            }
        }
    }
}

impl Grid {
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Zero-based lookup
    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    /// Zero-based lookup of a cell's source span
    pub fn span(&self, row: usize, col: usize) -> Option<Range<usize>> {
        self.cell(row, col).map(|cell| cell.span.clone())
    }

    /// Borrow the grid as the nested string slices the solver takes.
    pub fn texts(&self) -> Vec<Vec<&str>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.text.as_str()).collect())
            .collect()
    }
}

struct Line {
    cells: Vec<GridCell>,
    // Number of cells in front of the first '|', and where that bar is
    bar: Option<(usize, Range<usize>)>,
    extra_bar: Option<Range<usize>>,
    span: Range<usize>,
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == ',' || ch == '|'
}

fn split_line(content: &str, base: usize) -> Line {
    let mut cells = Vec::new();
    let mut bar = None;
    let mut extra_bar = None;
    let mut start: Option<usize> = None;

    let flush = |start: &mut Option<usize>, end: usize, cells: &mut Vec<GridCell>| {
        if let Some(s) = start.take() {
            cells.push(GridCell {
                text: content[s..end].to_string(),
                span: base + s..base + end,
            });
        }
    };

    for (idx, ch) in content.char_indices() {
        if is_separator(ch) {
            flush(&mut start, idx, &mut cells);
            if ch == '|' {
                let span = base + idx..base + idx + 1;
                if bar.is_none() {
                    bar = Some((cells.len(), span));
                } else if extra_bar.is_none() {
                    extra_bar = Some(span);
                }
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    flush(&mut start, content.len(), &mut cells);

    let trimmed_start = content.len() - content.trim_start().len();
    let trimmed_end = content.trim_end().len();
    let span = if trimmed_end > trimmed_start {
        base + trimmed_start..base + trimmed_end
    } else {
        base..base
    };

    Line {
        cells,
        bar,
        extra_bar,
        span,
    }
}

/// Read every row of `source`. All row-shape problems are collected, not
/// just the first.
pub fn read_grid(source: &str) -> Result<Grid, Vec<GridError>> {
    let mut rows: Vec<Vec<GridCell>> = Vec::new();
    let mut errors = Vec::new();
    let mut offset = 0;

    for raw_line in source.split_inclusive('\n') {
        let base = offset;
        offset += raw_line.len();

        let content = raw_line.split('#').next().unwrap_or("");
        let line = split_line(content, base);
        if line.cells.is_empty() && line.bar.is_none() {
            continue;
        }

        let row = rows.len() + 1;
        if let Some(span) = line.extra_bar {
            errors.push(GridError::MisplacedBar { row, span });
        } else if let Some((before, span)) = &line.bar {
            if *before + 1 != line.cells.len() {
                errors.push(GridError::MisplacedBar {
                    row,
                    span: span.clone(),
                });
            }
        }

        if let Some(first) = rows.first() {
            if first.len() != line.cells.len() {
                errors.push(GridError::RaggedRow {
                    row,
                    expected: first.len(),
                    found: line.cells.len(),
                    span: line.span.clone(),
                });
            }
        }
        rows.push(line.cells);
    }

    if rows.is_empty() {
        errors.push(GridError::Empty);
    }

    if errors.is_empty() {
        Ok(Grid { rows })
    } else {
        Err(errors)
    }
}
