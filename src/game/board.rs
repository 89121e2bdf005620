use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WIN_LENGTH: usize = 4;

/// Line directions checked around a placed token, as (row step, column step):
/// horizontal, vertical, diagonal down-right, diagonal down-left.
pub const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Rectangular grid stored row-major. Row 0 is the top, row `rows - 1` the
/// bottom; tokens settle towards the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the conventional 6x7 size
    pub fn new() -> Self {
        Self::with_size(ROWS, COLS)
    }

    /// Create a new empty board of the given size
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position, `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Signed lookup used by the axis scan; anything off the board is `None`.
    fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        match self.get(0, col) {
            Some(cell) => !cell.is_empty(),
            None => true,
        }
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }

        // Scan from the bottom for the first free slot
        for row in (0..self.rows).rev() {
            let idx = row * self.cols + col;
            if self.cells[idx].is_empty() {
                self.cells[idx] = cell;
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull(col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Clear every cell, keeping the size
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check whether the token at (row, col) is part of a run of `length`
    /// same-owner cells on any axis.
    pub fn has_line_through(&self, row: usize, col: usize, length: usize) -> bool {
        self.line_through(row, col, length).is_some()
    }

    /// Find the first run of `length` same-owner cells through (row, col),
    /// trying the axes in `AXES` order. Only the window of `length - 1` cells
    /// either side of the anchor is inspected.
    pub fn line_through(&self, row: usize, col: usize, length: usize) -> Option<Vec<(usize, usize)>> {
        let cell = self.get(row, col)?;
        if cell.is_empty() || length == 0 {
            return None;
        }

        AXES.iter()
            .find_map(|&(dr, dc)| self.scan_axis(row, col, dr, dc, cell, length))
    }

    fn scan_axis(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        cell: Cell,
        length: usize,
    ) -> Option<Vec<(usize, usize)>> {
        let reach = length as isize - 1;
        let (row, col) = (row as isize, col as isize);
        let mut count = 0;

        for i in -reach..=reach {
            let (r, c) = (row + i * dr, col + i * dc);
            if self.get_signed(r, c) == Some(cell) {
                count += 1;
                if count == length {
                    // Walk back from the current cell to recover the run
                    let line = (0..length as isize)
                        .rev()
                        .map(|k| ((r - k * dr) as usize, (c - k * dc) as usize))
                        .collect();
                    return Some(line);
                }
            } else {
                count = 0;
            }
        }

        None
    }

    /// The board reflected left to right
    pub fn mirrored(&self) -> Board {
        let mut mirror = Board::with_size(self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                mirror.cells[row * self.cols + (self.cols - 1 - col)] =
                    self.cells[row * self.cols + col];
            }
        }
        mirror
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let symbol = match self.cells[row * self.cols + col] {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        for col in 0..self.cols {
            write!(f, " {}", col % 10)?;
        }
        Ok(())
    }
}
