use crate::traversal::Traversal;

/// Rows in the reference grid.
pub const REFERENCE_ROWS: usize = 100;
/// Columns in the reference grid.
pub const REFERENCE_COLS: usize = 200;

/// Shape of the grid and the idiom used to walk it.
///
/// The binaries only ever run with [`GridConfig::reference`]; other
/// dimensions exist for library callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub traversal: Traversal,
}

impl GridConfig {
    /// 100 x 200, subscript traversal
    pub fn reference() -> Self {
        Self {
            rows: REFERENCE_ROWS,
            cols: REFERENCE_COLS,
            traversal: Traversal::default(),
        }
    }

    pub fn with_dims(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            traversal: Traversal::default(),
        }
    }

    pub fn with_traversal(self, traversal: Traversal) -> Self {
        Self { traversal, ..self }
    }

    /// Number of cells, saturating on overflow. Oversized shapes are
    /// rejected by `Grid::new`, not here.
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::reference()
    }
}
