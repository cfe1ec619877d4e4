//! Move generation over board snapshots.
//!
//! These functions never mutate their input. Search calls them on its own
//! copies of the board, so exploring a tree cannot disturb a live game.

pub mod perft;

use crate::Board;
use checkers_core::{Move, Side, Square};

/// A list of moves with a fixed maximum capacity.
///
/// Every move lands on an empty square reachable from at most four
/// neighbours, so no position produces more than 128 moves of one shape.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub const MAX_MOVES: usize = 128;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no moves.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the moves as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Returns true if the list holds `m`.
    pub fn contains(&self, m: &Move) -> bool {
        self.as_slice().contains(m)
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates every move for `side`.
///
/// Captures are mandatory: if any single-hop jump exists, only jumps are
/// returned. Continuation hops of a chain are separate moves, generated on
/// the board the previous hop produced. Pieces are visited in row-major order
/// and directions in the order of [`checkers_core::Piece::directions`], which
/// fixes the order of the result.
pub fn generate_moves(board: &Board, side: Side) -> MoveList {
    let mut steps = MoveList::new();
    let mut jumps = MoveList::new();

    for (from, piece) in board.pieces(side) {
        for &(dr, dc) in piece.directions() {
            if let Some(to) = from.offset(dr, dc) {
                if board.is_empty_at(to) {
                    steps.push(Move::new(from, to));
                }
            }
            if let Some(to) = board.jump_landing(from, piece, dr, dc) {
                jumps.push(Move::new(from, to));
            }
        }
    }

    if jumps.is_empty() {
        steps
    } else {
        jumps
    }
}

/// Generates the jumps available to the piece on `from`, of whichever side it
/// belongs to. Empty if the square is empty or the piece cannot jump.
pub fn capture_moves_from(board: &Board, from: Square) -> MoveList {
    let mut jumps = MoveList::new();
    if let Some(piece) = board.get(from) {
        for &(dr, dc) in piece.directions() {
            if let Some(to) = board.jump_landing(from, piece, dr, dc) {
                jumps.push(Move::new(from, to));
            }
        }
    }
    jumps
}

/// Returns the board after `mv`, leaving the input untouched.
///
/// Relocates the piece, removes a jumped piece and crowns on the far row.
/// No legality check is made; callers pass moves from [`generate_moves`].
pub fn apply_move(board: &Board, mv: Move) -> Board {
    let mut next = *board;
    next.relocate(mv);
    next
}
