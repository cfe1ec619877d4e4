//! Minimax search with alpha-beta pruning.

use crate::eval::{evaluate, is_terminal, Score};
use crate::stats::SearchStats;
use checkers_core::{Move, Side, Square};
use checkers_engine::{apply_move, capture_moves_from, generate_moves, Board};

/// Number of ordered root moves kept in [`SearchStats::ordering`].
const ORDERING_TRACE_LEN: usize = 3;

/// Outcome of one search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Minimax value of the root, positive favouring Dark.
    pub score: Score,
    /// Move to play, or `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    pub stats: SearchStats,
}

/// Fixed-depth alpha-beta searcher.
///
/// The searcher holds only its configuration. It works on private copies of
/// the board it is given, so one searcher can serve any number of searches,
/// from any thread, while a live game carries on.
#[derive(Debug, Clone, Copy)]
pub struct Searcher {
    depth: u32,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEPTH)
    }
}

impl Searcher {
    pub const DEFAULT_DEPTH: u32 = 3;

    /// Creates a searcher looking `depth` plies ahead.
    pub const fn new(depth: u32) -> Self {
        Searcher { depth }
    }

    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Picks the best move for `side`. Dark maximizes, Light minimizes.
    pub fn search(&self, board: &Board, side: Side) -> SearchResult {
        self.run(board, side, None)
    }

    /// Like [`search`](Self::search), but only considers jumps by the piece
    /// on `from`. Used to pick the next hop of a chain capture.
    pub fn search_continuation(&self, board: &Board, side: Side, from: Square) -> SearchResult {
        self.run(board, side, Some(from))
    }

    fn run(&self, board: &Board, side: Side, chain: Option<Square>) -> SearchResult {
        let mut stats = SearchStats::default();
        let (score, best_move) = alpha_beta(
            board,
            self.depth,
            Score::NEG_INFINITY,
            Score::INFINITY,
            side == Side::Dark,
            0,
            chain,
            &mut stats,
        );
        tracing::debug!(
            %side,
            depth = self.depth,
            score,
            best = ?best_move,
            expanded = stats.nodes_expanded,
            pruned = stats.nodes_pruned,
            max_depth = stats.max_depth,
            "search complete"
        );
        SearchResult {
            score,
            best_move,
            stats,
        }
    }
}

/// Minimax with alpha-beta pruning from `board`, `depth` plies deep.
///
/// Returns the value of the position and, when `depth > 0` and the position
/// is not terminal, the move achieving it. Counters are added to `stats`.
pub fn minimax(
    board: &Board,
    depth: u32,
    alpha: Score,
    beta: Score,
    maximizing: bool,
    stats: &mut SearchStats,
) -> (Score, Option<Move>) {
    alpha_beta(board, depth, alpha, beta, maximizing, 0, None, stats)
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta(
    board: &Board,
    depth: u32,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    ply: u32,
    chain: Option<Square>,
    stats: &mut SearchStats,
) -> (Score, Option<Move>) {
    stats.max_depth = stats.max_depth.max(ply);

    if depth == 0 || is_terminal(board) {
        return (evaluate(board), None);
    }

    let side = if maximizing { Side::Dark } else { Side::Light };
    let ordered = ordered_children(board, side, maximizing, chain);

    if ply == 0 {
        stats.ordering = ordering_trace(&ordered, maximizing);
        tracing::debug!(ordering = %stats.ordering, "root move ordering");
    }

    let mut best_score = if maximizing {
        Score::NEG_INFINITY
    } else {
        Score::INFINITY
    };
    let mut best_move = None;

    for (mv, child, _) in ordered {
        stats.nodes_expanded += 1;
        let (score, _) = alpha_beta(&child, depth - 1, alpha, beta, !maximizing, ply + 1, None, stats);

        // Ties keep the earlier move in ordering
        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves || best_move.is_none() {
            best_score = score;
            best_move = Some(mv);
        }

        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
        if beta <= alpha {
            stats.nodes_pruned += 1;
            break;
        }
    }

    (best_score, best_move)
}

/// Legal moves for `side` with the boards they produce, sorted by static
/// evaluation: best for Dark first when maximizing, best for Light first
/// otherwise. The sort is stable, so equal keys keep generation order.
fn ordered_children(
    board: &Board,
    side: Side,
    maximizing: bool,
    chain: Option<Square>,
) -> Vec<(Move, Board, Score)> {
    let moves = match chain {
        Some(from) => {
            let mut jumps = capture_moves_from(board, from);
            jumps.retain(|m| board.get(m.from).is_some_and(|p| p.side == side));
            jumps
        }
        None => generate_moves(board, side),
    };

    let mut children: Vec<(Move, Board, Score)> = moves
        .iter()
        .map(|&mv| {
            let child = apply_move(board, mv);
            (mv, child, evaluate(&child))
        })
        .collect();

    if maximizing {
        children.sort_by(|a, b| b.2.total_cmp(&a.2));
    } else {
        children.sort_by(|a, b| a.2.total_cmp(&b.2));
    }
    children
}

fn ordering_trace(children: &[(Move, Board, Score)], maximizing: bool) -> String {
    let label = if maximizing { "Max" } else { "Min" };
    let head: Vec<String> = children
        .iter()
        .take(ORDERING_TRACE_LEN)
        .map(|(mv, _, _)| mv.to_string())
        .collect();
    format!("{} Order (first {}): {}", label, ORDERING_TRACE_LEN, head.join(", "))
}
