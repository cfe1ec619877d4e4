//! American checkers rules engine.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid, with the authoritative legality checks and the
//!   single mutating entry point [`Board::move_piece`]
//! - [`generate_moves`] and [`apply_move`] - pure move generation and
//!   application over board snapshots, used by search
//! - [`Game`] - headless turn sequencing with chain captures and results
//!
//! # Rules
//!
//! Men move and jump diagonally forward only (Dark toward row 7, Light toward
//! row 0) and are crowned on the far row; kings move and jump in all four
//! diagonal directions. Captures are mandatory: if any jump exists for the
//! side to move, simple moves are illegal. After a jump, the same piece keeps
//! the turn while it can jump again.
//!
//! # Example
//!
//! ```
//! use checkers_core::{Side, Square};
//! use checkers_engine::{generate_moves, Board};
//!
//! let mut board = Board::new();
//! let moves = generate_moves(&board, Side::Dark);
//! assert_eq!(moves.len(), 7);
//!
//! let from = Square::new(2, 1).unwrap();
//! let to = Square::new(3, 2).unwrap();
//! assert!(board.move_piece(from, to, Side::Dark));
//! ```

mod board;
mod game;
pub mod movegen;
mod rules;

pub use board::Board;
pub use game::{Game, GameError, GameResult, MoveOutcome};
pub use movegen::{apply_move, capture_moves_from, generate_moves, MoveList};
