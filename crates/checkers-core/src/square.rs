//! Board square representation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::BOARD_SIZE;

/// A square on the board.
///
/// Rows run 0-7 top to bottom, columns 0-7 left to right. Dark starts on
/// rows 0-2 and Light on rows 5-7.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square, returning `None` when either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, as produced by direction arithmetic.
    #[inline]
    pub fn from_coords(row: i16, col: i16) -> Option<Self> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Square::new(row, col)
    }

    /// Returns the row, 0 at Dark's home edge.
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column.
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square `dr` rows and `dc` columns away, if it is on the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Square::from_coords(self.row as i16 + dr as i16, self.col as i16 + dc as i16)
    }

    /// Returns true for the playable squares, where (row + col) is odd.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// The top-left corner, (0,0).
    pub const TOP_LEFT: Square = Square { row: 0, col: 0 };

    /// Iterates over every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square{}", self)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
