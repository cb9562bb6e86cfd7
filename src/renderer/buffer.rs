//! Grid - the working character buffer of a render.
//!
//! Flat storage with row-major indexing: `index = y * width + x`. Every row
//! is exactly `width` cells and there are exactly `height` rows; that shape
//! is what [`Grid::check_shape`] verifies after each window is drawn.

use std::fmt;

use tracing::error;

use crate::error::{Error, Result};

/// A fixed-size 2D grid of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl Grid {
    /// Create a grid with every cell set to `fill`.
    ///
    /// Allocates `width * height` cells of 4 bytes each up front.
    pub fn filled(width: u16, height: u16, fill: char) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell (None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        if self.in_bounds(x, y) {
            self.cells.get(self.index(x, y)).copied()
        } else {
            None
        }
    }

    /// Cells of row `y`.
    pub fn row(&self, y: u16) -> Option<&[char]> {
        if y >= self.height {
            return None;
        }
        let start = self.index(0, y);
        self.cells.get(start..start + self.width as usize)
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // Not chunks(): a zero-width grid still has `height` (empty) rows.
        let width = self.width as usize;
        (0..self.height as usize).map(move |y| &self.cells[y * width..(y + 1) * width])
    }

    /// Row `y` as a string.
    pub fn row_string(&self, y: u16) -> Option<String> {
        self.row(y).map(|row| row.iter().collect())
    }

    /// Overwrite `span.len()` cells of row `y`, starting at column `x`.
    ///
    /// The span must fit inside the row. A span that does not means the
    /// caller clipped wrongly, which is reported as an invariant violation.
    pub fn write_span(&mut self, x: u16, y: u16, span: &[char]) -> Result<()> {
        let end = x as usize + span.len();
        if y >= self.height || end > self.width as usize {
            let err = Error::CompositorInvariantViolation(format!(
                "span of {} cells at ({x}, {y}) exceeds {}x{} grid",
                span.len(),
                self.width,
                self.height
            ));
            error!(%err, "span written outside the grid");
            return Err(err);
        }
        let start = self.index(x, y);
        self.cells[start..start + span.len()].copy_from_slice(span);
        Ok(())
    }

    /// Verify the grid still has `height` rows of exactly `width` cells.
    pub fn check_shape(&self, width: u16, height: u16) -> Result<()> {
        let expected = width as usize * height as usize;
        if self.width != width || self.height != height || self.cells.len() != expected {
            return Err(Error::CompositorInvariantViolation(format!(
                "grid is {}x{} with {} cells, expected {width}x{height} ({expected} cells)",
                self.width,
                self.height,
                self.cells.len()
            )));
        }
        Ok(())
    }

    /// Serialize as text: each row followed by a line break.
    pub fn to_frame(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for ch in row {
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
