//! Legality checks and the live-board mutator.
//!
//! These are the authoritative rules for a real game. Illegal input is a
//! normal outcome: queries return `false` and [`Board::move_piece`] leaves the
//! board untouched.

use crate::Board;
use checkers_core::{Move, Piece, Side, Square};

impl Board {
    /// Returns true if any piece of `side` can jump an adjacent enemy piece.
    ///
    /// When this holds, simple moves are illegal for `side` this turn.
    pub fn any_capture_available(&self, side: Side) -> bool {
        self.pieces(side)
            .any(|(sq, _)| self.can_capture_from(sq, side))
    }

    /// Returns true if the piece of `side` on `sq` has at least one jump.
    ///
    /// Used after a jump to decide whether the same piece continues a chain.
    pub fn can_capture_from(&self, sq: Square, side: Side) -> bool {
        match self.get(sq) {
            Some(piece) if piece.side == side => piece
                .directions()
                .iter()
                .any(|&(dr, dc)| self.jump_landing(sq, piece, dr, dc).is_some()),
            _ => false,
        }
    }

    /// Returns true if moving `side`'s piece from `from` to `to` is legal.
    pub fn is_valid_move(&self, from: Square, to: Square, side: Side) -> bool {
        if !self.is_empty_at(to) {
            return false;
        }
        let piece = match self.get(from) {
            Some(piece) if piece.side == side => piece,
            _ => return false,
        };

        let mv = Move::new(from, to);
        let (dr, dc) = mv.delta();

        if mv.is_step() && piece.directions().contains(&(dr, dc)) {
            return !self.any_capture_available(side);
        }

        if mv.is_jump() {
            return piece.directions().contains(&(dr / 2, dc / 2))
                && self.jump_landing(from, piece, dr / 2, dc / 2) == Some(to);
        }

        false
    }

    /// Plays a move on this board if it is legal for `side`.
    ///
    /// Removes a jumped piece and crowns a man reaching the far row. Returns
    /// false, without touching the board, if the move is illegal.
    pub fn move_piece(&mut self, from: Square, to: Square, side: Side) -> bool {
        if !self.is_valid_move(from, to, side) {
            return false;
        }
        self.relocate(Move::new(from, to));
        true
    }

    /// Landing square for a jump from `from` in direction `(dr, dc)`, if the
    /// midpoint holds an enemy of `piece` and the landing is empty.
    pub(crate) fn jump_landing(&self, from: Square, piece: Piece, dr: i8, dc: i8) -> Option<Square> {
        let over = from.offset(dr, dc)?;
        let landing = from.offset(dr * 2, dc * 2)?;
        if !self.is_empty_at(landing) {
            return None;
        }
        match self.get(over) {
            Some(victim) if victim.side != piece.side => Some(landing),
            _ => None,
        }
    }

    /// Moves a piece without legality checks: clears the jumped square and
    /// crowns on the far row.
    pub(crate) fn relocate(&mut self, mv: Move) {
        let Some(piece) = self.get(mv.from) else {
            return;
        };
        self.set(mv.from, None);
        if let Some(over) = mv.captured_square() {
            self.set(over, None);
        }
        let piece = if !piece.is_king() && mv.to.row() == piece.side.promotion_row() {
            tracing::debug!(side = %piece.side, square = %mv.to, "man crowned");
            piece.promoted()
        } else {
            piece
        };
        self.set(mv.to, Some(piece));
    }
}
