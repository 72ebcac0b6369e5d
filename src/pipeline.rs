use std::io::{self, BufWriter, Write};

use tracing::{debug, info, warn};

use crate::config::GridConfig;
use crate::error::GridError;
use crate::grid::Grid;
use crate::printer;
use crate::traversal::{self, Traversal};

/// What a completed fill-then-print run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub cols: usize,
    pub traversal: Traversal,
    pub lines_written: usize,
}

/// Build a zeroed grid, fill it, then write it to `sink` and flush.
pub fn run<W: Write>(config: &GridConfig, sink: &mut W) -> Result<RunSummary, GridError> {
    let mut grid = Grid::new(config.rows, config.cols)?;

    debug!(
        rows = config.rows,
        cols = config.cols,
        cells = config.cell_count(),
        traversal = %config.traversal,
        "fill pass"
    );
    traversal::fill(&mut grid, config.traversal);

    debug!("print pass");
    let lines_written = printer::write_grid(&grid, config.traversal, sink)?;
    sink.flush()?;

    let summary = RunSummary {
        rows: config.rows,
        cols: config.cols,
        traversal: config.traversal,
        lines_written,
    };
    info!(?summary, "run complete");
    Ok(summary)
}

/// Run the reference grid with `traversal` on stdout.
pub fn run_reference(traversal: Traversal) -> Result<RunSummary, GridError> {
    let config = GridConfig::reference().with_traversal(traversal);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&config, &mut out)
}

/// Outcome of running both idioms over the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equivalence {
    pub lines: usize,
    /// First line number (0-indexed) where the outputs disagree.
    pub first_mismatch: Option<usize>,
}

impl Equivalence {
    pub fn is_identical(&self) -> bool {
        self.first_mismatch.is_none()
    }

    /// Line count when identical, an error naming the first differing line
    /// otherwise.
    pub fn into_result(self) -> Result<usize, GridError> {
        match self.first_mismatch {
            None => Ok(self.lines),
            Some(line) => Err(GridError::Other(format!(
                "subscript and cursor outputs differ at line {}",
                line
            ))),
        }
    }
}

/// Render `config`'s shape with every traversal idiom and compare the bytes.
pub fn verify_equivalence(config: &GridConfig) -> Result<Equivalence, GridError> {
    let mut outputs = Vec::with_capacity(Traversal::ALL.len());
    for traversal in Traversal::ALL {
        let mut buf = Vec::new();
        run(&config.with_traversal(traversal), &mut buf)?;
        outputs.push(buf);
    }

    let (expected, rest) = outputs
        .split_first()
        .ok_or_else(|| GridError::Other("no traversal idioms to compare".to_string()))?;
    let lines = count_lines(expected);

    let first_mismatch = rest
        .iter()
        .filter_map(|other| first_differing_line(expected, other))
        .min();

    match first_mismatch {
        Some(line) => warn!(line, "traversal outputs differ"),
        None => info!(lines, "traversal outputs identical"),
    }
    Ok(Equivalence {
        lines,
        first_mismatch,
    })
}

fn count_lines(output: &[u8]) -> usize {
    output.iter().filter(|&&b| b == b'\n').count()
}

/// 0-indexed line where `other` stops matching `expected`, or `None` when
/// the bytes are identical.
fn first_differing_line(expected: &[u8], other: &[u8]) -> Option<usize> {
    if expected == other {
        return None;
    }
    let line = expected
        .split(|&b| b == b'\n')
        .zip(other.split(|&b| b == b'\n'))
        .position(|(a, b)| a != b)
        // only the trailing terminator differs
        .unwrap_or_else(|| count_lines(expected).min(count_lines(other)));
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_summary() {
        let mut buf = Vec::new();
        let config = GridConfig::with_dims(4, 5).with_traversal(Traversal::Cursor);
        let summary = run(&config, &mut buf).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                rows: 4,
                cols: 5,
                traversal: Traversal::Cursor,
                lines_written: 20,
            }
        );
        assert!(buf.ends_with(b"18\n19\n"));
    }

    #[test]
    fn test_run_rejects_oversized_grid() {
        let mut buf = Vec::new();
        let err = run(&GridConfig::with_dims(usize::MAX, 3), &mut buf).unwrap_err();

        assert!(matches!(err, GridError::Dimensions(_)));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_verify_equivalence_reference() {
        let eq = verify_equivalence(&GridConfig::reference()).unwrap();

        assert!(eq.is_identical());
        assert_eq!(eq.lines, 20_000);
    }

    #[test]
    fn test_verify_equivalence_empty() {
        let eq = verify_equivalence(&GridConfig::with_dims(0, 9)).unwrap();
        assert_eq!(
            eq,
            Equivalence {
                lines: 0,
                first_mismatch: None
            }
        );
    }

    #[test]
    fn test_first_differing_line_identical() {
        assert_eq!(first_differing_line(b"0\n1\n", b"0\n1\n"), None);
        assert_eq!(first_differing_line(b"", b""), None);
    }

    #[test]
    fn test_first_differing_line_in_middle() {
        assert_eq!(first_differing_line(b"0\n1\n", b"0\n2\n"), Some(1));
        assert_eq!(first_differing_line(b"0\n1\n2\n", b"9\n1\n2\n"), Some(0));
    }

    #[test]
    fn test_first_differing_line_length_mismatch() {
        assert_eq!(first_differing_line(b"0\n1\n", b"0\n1\n2\n"), Some(2));
        assert_eq!(first_differing_line(b"0\n1\n2\n", b"0\n1\n"), Some(2));
        // missing final terminator
        assert_eq!(first_differing_line(b"0\n1\n", b"0\n1"), Some(1));
    }

    #[test]
    fn test_into_result_identical() {
        let eq = Equivalence {
            lines: 20_000,
            first_mismatch: None,
        };
        assert_eq!(eq.into_result().unwrap(), 20_000);
    }

    #[test]
    fn test_into_result_mismatch_is_error() {
        let eq = Equivalence {
            lines: 4,
            first_mismatch: Some(3),
        };
        match eq.into_result() {
            Err(GridError::Other(msg)) => assert!(msg.ends_with("line 3"), "got: {}", msg),
            other => panic!("expected Other error, got {:?}", other),
        }
    }
}
