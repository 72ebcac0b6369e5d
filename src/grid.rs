use crate::config::{REFERENCE_COLS, REFERENCE_ROWS};
use crate::error::GridError;

/// Largest number of cells a grid may hold. The fill counter is an `i32`
/// and must still be representable after its final increment.
pub const MAX_CELLS: usize = i32::MAX as usize;

/// Fixed-size two-dimensional grid of `i32`, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
}

impl Grid {
    /// Zero-initialized grid of `rows` x `cols`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = rows.checked_mul(cols).ok_or_else(|| {
            GridError::Dimensions(format!("{} x {} overflows usize", rows, cols))
        })?;
        if len > MAX_CELLS {
            return Err(GridError::Dimensions(format!(
                "{} x {} = {} cells exceeds the limit of {}",
                rows, cols, len, MAX_CELLS
            )));
        }
        Ok(Self::zeroed(rows, cols))
    }

    /// The 100 x 200 grid the binaries print.
    pub fn reference() -> Self {
        Self::zeroed(REFERENCE_ROWS, REFERENCE_COLS)
    }

    fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.cells
    }

    /// Bounds-checked read of `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Cursor over the rows, front to back.
    pub fn rows_iter(&self) -> Rows<'_> {
        Rows {
            rest: &self.cells,
            cols: self.cols,
            remaining: self.rows,
        }
    }

    /// Mutable cursor over the rows, front to back.
    pub fn rows_mut(&mut self) -> RowsMut<'_> {
        RowsMut {
            rest: &mut self.cells,
            cols: self.cols,
            remaining: self.rows,
        }
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

// (row, column)
impl std::ops::Index<(usize, usize)> for Grid {
    type Output = i32;
    fn index(&self, (row, col): (usize, usize)) -> &i32 {
        &self.cells[self.offset(row, col)]
    }
}

// (row, column)
impl std::ops::IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut i32 {
        let offset = self.offset(row, col);
        &mut self.cells[offset]
    }
}

/// Walks the storage one row at a time by splitting off `cols` cells from
/// the front. Yields exactly `rows` slices, empty ones when `cols == 0`.
pub struct Rows<'a> {
    rest: &'a [i32],
    cols: usize,
    remaining: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [i32];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let (row, rest) = self.rest.split_at(self.cols);
        self.rest = rest;
        self.remaining -= 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

pub struct RowsMut<'a> {
    rest: &'a mut [i32],
    cols: usize,
    remaining: usize,
}

impl<'a> Iterator for RowsMut<'a> {
    type Item = &'a mut [i32];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let rest = std::mem::take(&mut self.rest);
        let (row, rest) = rest.split_at_mut(self.cols);
        self.rest = rest;
        self.remaining -= 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RowsMut<'_> {}
