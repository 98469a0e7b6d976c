//! The immutable 2D occupancy grid.
//!
//! [`Grid`] is a fixed-size, row-major field of [`Cell`]s, each either
//! walkable or blocked. It is built once by level setup and then shared
//! read-only (`&Grid`) by every search engine; no search mutates it.

use std::fmt;

use crate::geom::Point;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// The cell can be entered.
    #[default]
    Walkable,
    /// The cell is an obstacle.
    Blocked,
}

impl Cell {
    /// Decode the binary occupancy encoding: 0 is walkable, anything else
    /// is blocked.
    #[inline]
    pub const fn from_occupancy(v: u8) -> Self {
        match v {
            0 => Self::Walkable,
            _ => Self::Blocked,
        }
    }
}

/// Error building a [`Grid`] from caller-supplied data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Zero or negative width or height.
    EmptyGrid,
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Expected length (that of the first row).
        expected: usize,
        /// Actual length of the offending row.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid dimensions must be positive"),
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} has {actual} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// A fixed-size 2D occupancy map.
///
/// Dimensions are fixed for the grid's lifetime and no cell changes during a
/// search; engines only ever hold a `&Grid`. Out-of-range queries answer
/// `false`, never fault.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell walkable.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Walkable; (width * height) as usize],
        })
    }

    /// Build a grid from rows of binary occupancy values (0 = walkable,
    /// 1 = blocked). `rows[y][x]` becomes the cell at `(x, y)`.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }
            cells.extend(row.iter().map(|&v| Cell::from_occupancy(v)));
        }
        Ok(Self {
            width: width as i32,
            height: height as i32,
            cells,
        })
    }

    /// Grid width in cells.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies within the grid bounds.
    #[inline]
    pub const fn is_inside(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether `p` is inside the grid and its cell is walkable.
    ///
    /// Out-of-range coordinates are simply not walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.is_inside(p) && self.cells[self.index(p)] == Cell::Walkable
    }

    /// The cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<Cell> {
        if self.is_inside(p) {
            Some(self.cells[self.index(p)])
        } else {
            None
        }
    }

    /// Set the cell at `p` during level construction.
    ///
    /// Out-of-range positions are ignored. Cells must not change while a
    /// search holds a reference to the grid.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if self.is_inside(p) {
            let i = self.index(p);
            self.cells[i] = cell;
        }
    }

    /// Set every cell to `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }
}

impl fmt::Display for Grid {
    /// Render the grid as rows of `.` (walkable) and `#` (blocked).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = match self.cells[(y * self.width + x) as usize] {
                    Cell::Walkable => '.',
                    Cell::Blocked => '#',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
