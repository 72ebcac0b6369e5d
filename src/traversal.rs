use std::ops::Range;

use itertools::{Itertools, Product};

use crate::grid::{Grid, Rows};

/// How a pass walks the grid. Both idioms visit cells in row-major order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Traversal {
    /// Compute `(row, col)` for every cell and index with it.
    #[default]
    Subscript,
    /// Advance over rows, then over the cells within each row.
    Cursor,
}

impl Traversal {
    pub const ALL: [Traversal; 2] = [Traversal::Subscript, Traversal::Cursor];

    pub fn name(self) -> &'static str {
        match self {
            Traversal::Subscript => "subscript",
            Traversal::Cursor => "cursor",
        }
    }
}

impl std::fmt::Display for Traversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Overwrite every cell with a counter starting at 0, row-major, so that
/// afterwards `grid[(row, col)] == row * cols + col`.
pub fn fill(grid: &mut Grid, traversal: Traversal) {
    match traversal {
        Traversal::Subscript => fill_subscript(grid),
        Traversal::Cursor => fill_cursor(grid),
    }
}

fn fill_subscript(grid: &mut Grid) {
    let mut next = 0;
    for (row, col) in (0..grid.rows()).cartesian_product(0..grid.cols()) {
        grid[(row, col)] = next;
        next += 1;
    }
}

fn fill_cursor(grid: &mut Grid) {
    let mut next = 0;
    for row in grid.rows_mut() {
        for cell in row.iter_mut() {
            *cell = next;
            next += 1;
        }
    }
}

/// Lazily read every cell in row-major order.
pub fn values(grid: &Grid, traversal: Traversal) -> Values<'_> {
    let walk = match traversal {
        Traversal::Subscript => Walk::Subscript {
            grid,
            positions: (0..grid.rows()).cartesian_product(0..grid.cols()),
        },
        Traversal::Cursor => Walk::Cursor {
            rows: grid.rows_iter(),
            row: (&[]).iter(),
        },
    };
    Values {
        walk,
        remaining: grid.len(),
    }
}

pub struct Values<'a> {
    walk: Walk<'a>,
    remaining: usize,
}

enum Walk<'a> {
    Subscript {
        grid: &'a Grid,
        positions: Product<Range<usize>, Range<usize>>,
    },
    Cursor {
        rows: Rows<'a>,
        row: std::slice::Iter<'a, i32>,
    },
}

impl Iterator for Values<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let value = match &mut self.walk {
            Walk::Subscript { grid, positions } => positions.next().map(|pos| grid[pos]),
            Walk::Cursor { rows, row } => loop {
                if let Some(&value) = row.next() {
                    break Some(value);
                }
                match rows.next() {
                    Some(next_row) => *row = next_row.iter(),
                    None => break None,
                }
            },
        };
        if value.is_some() {
            self.remaining -= 1;
        }
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Values<'_> {}
