//! Static evaluation.

use checkers_core::{Rank, Side};
use checkers_engine::Board;

/// Evaluation score. Positive favours Dark, negative favours Light.
pub type Score = f64;

pub const MAN_VALUE: Score = 1.0;
pub const KING_VALUE: Score = 1.5;

/// Material balance: men count 1, kings 1.5, Dark minus Light.
pub fn evaluate(board: &Board) -> Score {
    let material = |side: Side| {
        board.count(side, Rank::Man) as Score * MAN_VALUE
            + board.count(side, Rank::King) as Score * KING_VALUE
    };
    material(Side::Dark) - material(Side::Light)
}

/// Returns true once either side has no pieces left.
pub fn is_terminal(board: &Board) -> bool {
    !board.has_pieces(Side::Dark) || !board.has_pieces(Side::Light)
}
