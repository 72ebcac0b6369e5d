use std::io::Write;

use crate::error::GridError;
use crate::grid::Grid;
use crate::traversal::{self, Traversal};

/// Lazily render every cell as a decimal line, without the terminator.
pub fn lines(grid: &Grid, traversal: Traversal) -> impl Iterator<Item = String> + '_ {
    traversal::values(grid, traversal).map(|value| value.to_string())
}

/// Write one decimal integer per line to `sink`. Returns the number of
/// lines written. The sink is not flushed.
pub fn write_grid<W: Write>(
    grid: &Grid,
    traversal: Traversal,
    sink: &mut W,
) -> Result<usize, GridError> {
    let mut written = 0;
    for value in traversal::values(grid, traversal) {
        writeln!(sink, "{}", value)?;
        written += 1;
    }
    Ok(written)
}
