//! Move representation.

use crate::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single move: an origin and a destination square.
///
/// A one-step diagonal is a simple move; a two-step diagonal is a jump over
/// the piece on the midpoint. Multi-jump sequences are played as consecutive
/// single-hop moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Builds a move from raw coordinates, returning `None` if any is off the board.
    pub const fn from_coords(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Option<Self> {
        match (Square::new(from_row, from_col), Square::new(to_row, to_col)) {
            (Some(from), Some(to)) => Some(Move { from, to }),
            _ => None,
        }
    }

    /// Row and column deltas from origin to destination.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        (
            self.to.row() as i8 - self.from.row() as i8,
            self.to.col() as i8 - self.from.col() as i8,
        )
    }

    /// Returns true if this is a one-square diagonal step.
    #[inline]
    pub const fn is_step(self) -> bool {
        let (dr, dc) = self.delta();
        dr.abs() == 1 && dc.abs() == 1
    }

    /// Returns true if this is a two-square diagonal jump.
    #[inline]
    pub const fn is_jump(self) -> bool {
        let (dr, dc) = self.delta();
        dr.abs() == 2 && dc.abs() == 2
    }

    /// The square jumped over, for jumps.
    pub fn captured_square(self) -> Option<Square> {
        if !self.is_jump() {
            return None;
        }
        let (dr, dc) = self.delta();
        self.from.offset(dr / 2, dc / 2)
    }

    /// A placeholder move used to fill fixed-size buffers; never legal.
    pub const NULL: Move = Move::new(Square::TOP_LEFT, Square::TOP_LEFT);
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_shapes() {
        let step = Move::from_coords(2, 1, 3, 2).unwrap();
        assert!(step.is_step());
        assert!(!step.is_jump());
        assert_eq!(step.captured_square(), None);

        let jump = Move::from_coords(2, 1, 4, 3).unwrap();
        assert!(jump.is_jump());
        assert!(!jump.is_step());
        assert_eq!(jump.captured_square(), Square::new(3, 2));
    }

    #[test]
    fn backward_jump_midpoint() {
        let jump = Move::from_coords(5, 4, 3, 2).unwrap();
        assert_eq!(jump.delta(), (-2, -2));
        assert_eq!(jump.captured_square(), Square::new(4, 3));
    }

    #[test]
    fn odd_shapes_are_neither() {
        let knight = Move::from_coords(2, 1, 4, 2).unwrap();
        assert!(!knight.is_step());
        assert!(!knight.is_jump());
        let straight = Move::from_coords(2, 1, 3, 1).unwrap();
        assert!(!straight.is_step());
    }

    #[test]
    fn move_from_coords_bounds() {
        assert!(Move::from_coords(7, 6, 8, 7).is_none());
    }

    #[test]
    fn move_display() {
        let m = Move::from_coords(2, 1, 3, 0).unwrap();
        assert_eq!(format!("{}", m), "(2,1)->(3,0)");
        assert_eq!(format!("{:?}", m), "Move((2,1)->(3,0))");
    }
}
