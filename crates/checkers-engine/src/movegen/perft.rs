//! Perft (performance test) for move generator validation.
//!
//! Counts leaf nodes of the single-hop move tree, alternating sides every
//! ply, the same tree search walks.

use super::{apply_move, generate_moves};
use crate::Board;
use checkers_core::Side;

/// Counts the number of leaf nodes at the given depth with `side` to move.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&m| perft(&apply_move(board, m), side.opposite(), depth - 1))
        .sum()
}

/// Perft with divide - node count below each root move, sorted by move text.
pub fn perft_divide(board: &Board, side: Side, depth: u32) -> Vec<(String, u64)> {
    let moves = generate_moves(board, side);
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .map(|&m| {
            let nodes = if depth > 1 {
                perft(&apply_move(board, m), side.opposite(), depth - 1)
            } else {
                1
            };
            (m.to_string(), nodes)
        })
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    // Opening counts for checkers with single-hop captures
    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&Board::new(), Side::Dark, 1), 7);
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&Board::new(), Side::Dark, 2), 49);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&Board::new(), Side::Dark, 3), 302);
    }

    #[test]
    fn perft_depth_zero() {
        assert_eq!(perft(&Board::new(), Side::Dark, 0), 1);
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::new();
        let divide = perft_divide(&board, Side::Dark, 3);
        assert_eq!(divide.len(), 7);
        let total: u64 = divide.iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&board, Side::Dark, 3));
    }
}
