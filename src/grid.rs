use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid of {len} cells cannot have width {width}")]
    InvalidGrid { len: usize, width: usize },

    #[error("Cell ({x}, {y}) is outside of a {width}x{height} grid")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("A {width}x{height} grid has more cells than fit in memory")]
    TooLarge { width: usize, height: usize },

    #[error("Unexpected character '{ch}' on line {line}, expected '#' or '.'")]
    InvalidCell { ch: char, line: usize },
}

/// A fixed size grid of alive/dead cells.
///
/// Cells are stored row-major, so cell `(x, y)` lives at `x + y * width`. The number of cells is
/// always a multiple of `width`, which is never `0`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead `width` by `height` grid.
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;

        Self::from_cells(width, vec![false; len])
    }

    /// Wrap a flat row-major buffer of cells.
    pub fn from_cells(width: usize, cells: Vec<bool>) -> GridResult<Self> {
        if width == 0 || cells.len() % width != 0 {
            return Err(GridError::InvalidGrid {
                len: cells.len(),
                width,
            });
        }

        Ok(Self { width, cells })
    }

    /// A grid shaped like `self` holding `cells`.
    pub(crate) fn with_cells(&self, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());

        Self {
            width: self.width,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len() / self.width
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// State of the cell at `(x, y)`, or `None` if it lies outside the grid.
    ///
    /// What an off-grid position means is left to the caller.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> GridResult<()> {
        let Some(i) = self.index(x, y) else {
            return Err(GridError::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height(),
            });
        };

        self.cells[i] = alive;

        Ok(())
    }

    /// Iterate over every cell as `(x, y, alive)`, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let w = self.width;

        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &alive)| (i % w, i / w, alive))
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height() {
            Some(x + y * self.width)
        } else {
            None
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height())?;
        fmt::Display::fmt(self, f)
    }
}

/// Renders one line per row, `#` for alive and `.` for dead.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
        }

        Ok(())
    }
}

/// Parses the `Display` form back. Blank lines are skipped and each line is trimmed, so grids can
/// be written as indented string literals.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut width = 0;
        let mut cells = Vec::new();

        for (line_no, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let before = cells.len();
            for ch in line.chars() {
                match ch {
                    '#' => cells.push(true),
                    '.' => cells.push(false),
                    ch => {
                        return Err(GridError::InvalidCell {
                            ch,
                            line: line_no + 1,
                        });
                    }
                }
            }

            let row = cells.len() - before;
            if width == 0 {
                width = row;
            } else if row != width {
                return Err(GridError::InvalidGrid {
                    len: cells.len(),
                    width,
                });
            }
        }

        Grid::from_cells(width, cells)
    }
}
