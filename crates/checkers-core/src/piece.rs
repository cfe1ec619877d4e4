//! Piece representation.

use crate::Side;

/// Whether a piece has been crowned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    Man = 0,
    King = 1,
}

/// A piece on the board: a side and a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
}

/// Diagonal unit steps available to kings.
const ALL_DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const DARK_FORWARD: [(i8, i8); 2] = [(1, -1), (1, 1)];
const LIGHT_FORWARD: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

impl Piece {
    /// Creates a piece from its side and rank.
    #[inline]
    pub const fn new(side: Side, rank: Rank) -> Self {
        Piece { side, rank }
    }

    /// Creates an uncrowned piece.
    #[inline]
    pub const fn man(side: Side) -> Self {
        Piece::new(side, Rank::Man)
    }

    /// Creates a king.
    #[inline]
    pub const fn king(side: Side) -> Self {
        Piece::new(side, Rank::King)
    }

    /// Returns true for a crowned piece.
    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Returns this piece crowned.
    #[inline]
    pub const fn promoted(self) -> Self {
        Piece::king(self.side)
    }

    /// Unit diagonal directions this piece may move and jump in.
    ///
    /// Kings use all four diagonals; men only the two pointing forward for their side.
    pub const fn directions(self) -> &'static [(i8, i8)] {
        match (self.rank, self.side) {
            (Rank::King, _) => &ALL_DIAGONALS,
            (Rank::Man, Side::Dark) => &DARK_FORWARD,
            (Rank::Man, Side::Light) => &LIGHT_FORWARD,
        }
    }

    /// Returns the layout character for this piece.
    pub const fn to_char(self) -> char {
        match (self.side, self.rank) {
            (Side::Dark, Rank::Man) => 'd',
            (Side::Dark, Rank::King) => 'D',
            (Side::Light, Rank::Man) => 'l',
            (Side::Light, Rank::King) => 'L',
        }
    }

    /// Parses a layout character into a piece.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(Piece::man(Side::Dark)),
            'D' => Some(Piece::king(Side::Dark)),
            'l' => Some(Piece::man(Side::Light)),
            'L' => Some(Piece::king(Side::Light)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rank {
            Rank::Man => write!(f, "{} man", self.side),
            Rank::King => write!(f, "{} king", self.side),
        }
    }
}
