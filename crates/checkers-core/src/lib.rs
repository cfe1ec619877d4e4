//! Core types for American checkers.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Piece`], [`Side`] and [`Rank`] for piece representation
//! - [`Square`] for board coordinates (row 0 at the top, column 0 at the left)
//! - [`Move`] for origin/destination pairs
//! - [`Layout`] text notation for boards

mod layout;
mod mov;
mod piece;
mod side;
mod square;

pub use layout::{Cells, Layout, LayoutError};
pub use mov::Move;
pub use piece::{Piece, Rank};
pub use side::Side;
pub use square::Square;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;
