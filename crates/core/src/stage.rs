//! Stage module - the fixed-size playing field
//!
//! The stage is a `height x width` grid of [`Cell`]s stored as a flat row-major
//! vector. Dimensions are fixed at creation; only cell contents change.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use arrayvec::ArrayVec;

use crate::types::{Cell, STAGE_HEIGHT, STAGE_WIDTH};

/// The playing field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stage {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Stage {
    /// Create an empty stage with the given dimensions.
    ///
    /// Panics if either dimension is zero.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "stage must be at least 1x1");
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; height * width],
        }
    }

    /// Build a stage from explicit rows (top row first).
    ///
    /// Panics on an empty or non-rectangular row set.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        assert!(height > 0, "stage must have at least one row");
        let width = rows[0].len();
        assert!(width > 0, "stage must have at least one column");
        assert!(
            rows.iter().all(|row| row.len() == width),
            "stage rows must all have the same width"
        );

        Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y), `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and clear
    pub fn is_clear(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|cell| cell.is_clear())
    }

    /// One row as a slice
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// A row is full when no cell holds the empty marker
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_filled())
    }

    /// Number of full rows currently on the stage
    pub fn full_row_count(&self) -> usize {
        (0..self.height).filter(|&y| self.is_row_full(y)).count()
    }

    /// Remove every full row and backfill the same number of empty rows at the top.
    ///
    /// Surviving rows keep their relative order. Returns the number of rows removed.
    /// Uses a bottom-up two-pointer compaction, so no temporary rows are allocated.
    pub fn sweep_rows(&mut self) -> usize {
        let width = self.width;
        let mut write_y = self.height;
        let mut removed = 0;

        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                removed += 1;
                continue;
            }

            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(Cell::EMPTY);

        removed
    }

    /// Write cells at absolute positions, skipping those outside the stage.
    ///
    /// Returns how many cells were written.
    pub fn stamp(&mut self, cells: &ArrayVec<(i32, i32, Cell), 16>) -> usize {
        let mut written = 0;
        for &(x, y, cell) in cells {
            if self.set(x, y, cell) {
                written += 1;
            }
        }
        written
    }

    /// Reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Overwrite this stage with `other`, reusing the existing allocation
    pub fn copy_from(&mut self, other: &Stage) {
        self.width = other.width;
        self.height = other.height;
        self.cells.clear();
        self.cells.extend_from_slice(&other.cells);
    }

    /// Reset every cell to empty, keeping dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Copy of the stage as rows (top row first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(STAGE_HEIGHT, STAGE_WIDTH)
    }
}
