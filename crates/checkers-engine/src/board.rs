//! Board representation.

use checkers_core::{Cells, Layout, LayoutError, Piece, Rank, Side, Square, BOARD_SIZE};
use std::fmt;

/// An 8x8 checkers board.
///
/// The board is a plain value (64 one-byte cells) so it can be copied freely;
/// search works on its own copies and never touches a live board.
///
/// Cells change only through [`Board::move_piece`] or [`crate::apply_move`];
/// there is no public setter.
///
/// ```compile_fail
/// use checkers_core::{Piece, Side, Square};
/// use checkers_engine::Board;
///
/// let mut board = Board::new();
/// board.set(Square::new(4, 4).unwrap(), Some(Piece::king(Side::Dark)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Cells,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates the starting position: twelve Dark men on the dark squares of
    /// rows 0-2 and twelve Light men on rows 5-7.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for sq in Square::all().filter(|sq| sq.is_dark()) {
            match sq.row() {
                0..=2 => board.set(sq, Some(Piece::man(Side::Dark))),
                5..=7 => board.set(sq, Some(Piece::man(Side::Light))),
                _ => {}
            }
        }
        board
    }

    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a board from the text layout notation.
    pub fn from_layout(text: &str) -> Result<Self, LayoutError> {
        Ok(Board {
            cells: Layout::parse(text)?,
        })
    }

    /// Returns the board in text layout notation.
    pub fn to_layout(&self) -> String {
        Layout::render(&self.cells)
    }

    /// Read-only access to the grid, `cells()[row][col]`.
    #[inline]
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Returns the piece on a square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Places or clears a piece. Rule-checked moves go through `move_piece`.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Returns true if the square is on the board and empty.
    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Iterates over the pieces of one side in row-major order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.get(sq) {
            Some(piece) if piece.side == side => Some((sq, piece)),
            _ => None,
        })
    }

    /// Counts the pieces of a given side and rank.
    pub fn count(&self, side: Side, rank: Rank) -> usize {
        self.pieces(side).filter(|(_, p)| p.rank == rank).count()
    }

    /// Counts all pieces of a side.
    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    /// Returns true if the side has at least one piece left.
    pub fn has_pieces(&self, side: Side) -> bool {
        self.pieces(side).next().is_some()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_layout())
    }
}
