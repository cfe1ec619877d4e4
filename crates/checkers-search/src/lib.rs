//! Adversarial search for American checkers.
//!
//! [`Searcher`] runs a fixed-depth minimax search with alpha-beta pruning.
//! Dark is the maximizing side and Light the minimizing side; scores come
//! from the material count in [`evaluate`]. Candidate moves are ordered by the
//! static evaluation of the position they lead to before recursing, which
//! raises the pruning yield without changing the result.
//!
//! Every search returns its own [`SearchStats`]; callers that want running
//! totals across moves keep a [`SearchReport`].
//!
//! # Example
//!
//! ```
//! use checkers_core::Side;
//! use checkers_engine::Board;
//! use checkers_search::Searcher;
//!
//! let result = Searcher::new(3).search(&Board::new(), Side::Dark);
//! assert!(result.best_move.is_some());
//! println!("{} nodes, {} cutoffs", result.stats.nodes_expanded, result.stats.nodes_pruned);
//! ```

mod eval;
mod search;
mod stats;

pub use eval::{evaluate, is_terminal, Score, KING_VALUE, MAN_VALUE};
pub use search::{minimax, SearchResult, Searcher};
pub use stats::{SearchReport, SearchStats};
