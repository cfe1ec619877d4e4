//! Headless game management.
//!
//! [`Game`] sequences turns on a live [`Board`]: it tracks the side to move,
//! keeps the turn with the capturing piece while a chain of jumps continues,
//! records history and detects the end of the game. Input handling and
//! presentation belong to callers.

use crate::movegen::{capture_moves_from, generate_moves};
use crate::{Board, MoveList};
use checkers_core::{Move, Side, Square};
use thiserror::Error;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Light has no pieces or no legal move.
    DarkWins,
    /// Dark has no pieces or no legal move.
    LightWins,
    /// The ply limit was reached.
    Draw,
}

impl GameResult {
    /// The side that lost, if any.
    pub const fn loser(self) -> Option<Side> {
        match self {
            GameResult::DarkWins => Some(Side::Light),
            GameResult::LightWins => Some(Side::Dark),
            GameResult::Draw => None,
        }
    }

    const fn win_for(side: Side) -> Self {
        match side {
            Side::Dark => GameResult::DarkWins,
            Side::Light => GameResult::LightWins,
        }
    }
}

/// What happened to the turn after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The turn passed to the other side.
    TurnPassed,
    /// The piece that just jumped can jump again and must continue.
    ChainContinues(Square),
}

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    #[error("illegal move: coordinates off the board")]
    OffBoard,
    #[error("game has already ended")]
    GameAlreadyOver,
}

/// A checkers game between Dark and Light.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Side,
    /// Square of the piece that must continue a chain capture.
    chain: Option<Square>,
    history: Vec<Move>,
    ply_limit: Option<usize>,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game from the starting position, Dark to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Side::Dark)
    }

    /// Creates a game from a custom position.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        let mut game = Game {
            board,
            side_to_move,
            chain: None,
            history: Vec::new(),
            ply_limit: None,
            result: None,
        };
        game.check_game_end();
        game
    }

    /// Declares the game drawn once `limit` moves (single hops) have been played.
    pub fn with_ply_limit(mut self, limit: usize) -> Self {
        self.ply_limit = Some(limit);
        self.check_game_end();
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// The square of the piece that must keep jumping, during a chain capture.
    #[inline]
    pub fn pending_chain(&self) -> Option<Square> {
        self.chain
    }

    /// Every move played so far, one entry per hop.
    pub fn move_history(&self) -> &[Move] {
        &self.history
    }

    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Legal moves for the side to move; only continuation jumps during a chain.
    pub fn legal_moves(&self) -> MoveList {
        match self.chain {
            Some(sq) => capture_moves_from(&self.board, sq),
            None => generate_moves(&self.board, self.side_to_move),
        }
    }

    /// Plays a move given as raw coordinates.
    pub fn make_move_coords(
        &mut self,
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    ) -> Result<MoveOutcome, GameError> {
        let mv = Move::from_coords(from_row, from_col, to_row, to_col).ok_or(GameError::OffBoard)?;
        self.make_move(mv)
    }

    /// Plays a move for the side to move.
    ///
    /// After a jump the turn is kept while the same piece can jump again;
    /// the caller must then play a continuation from the returned square.
    pub fn make_move(&mut self, mv: Move) -> Result<MoveOutcome, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }
        if let Some(sq) = self.chain {
            if mv.from != sq || !mv.is_jump() {
                return Err(GameError::IllegalMove(mv));
            }
        }
        let side = self.side_to_move;
        if !self.board.move_piece(mv.from, mv.to, side) {
            return Err(GameError::IllegalMove(mv));
        }
        self.history.push(mv);
        tracing::trace!(%side, %mv, ply = self.history.len(), "move played");

        if mv.is_jump() && self.board.can_capture_from(mv.to, side) {
            self.chain = Some(mv.to);
            self.check_game_end();
            return Ok(MoveOutcome::ChainContinues(mv.to));
        }

        self.chain = None;
        self.side_to_move = side.opposite();
        self.check_game_end();
        Ok(MoveOutcome::TurnPassed)
    }

    fn check_game_end(&mut self) {
        self.result = if !self.board.has_pieces(Side::Light) {
            Some(GameResult::DarkWins)
        } else if !self.board.has_pieces(Side::Dark) {
            Some(GameResult::LightWins)
        } else if self.legal_moves().is_empty() {
            Some(GameResult::win_for(self.side_to_move.opposite()))
        } else if self.ply_limit.is_some_and(|limit| self.history.len() >= limit) {
            Some(GameResult::Draw)
        } else {
            None
        };
        if let Some(result) = self.result {
            tracing::debug!(?result, plies = self.history.len(), "game over");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::Piece;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    const DOUBLE_JUMP: &str = "
        ........
        ........
        .d......
        ..l.....
        ........
        ....l...
        ........
        ......l.
    ";

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Side::Dark);
        assert_eq!(game.legal_moves().len(), 7);
        assert!(!game.is_game_over());
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.make_move_coords(2, 1, 3, 0), Ok(MoveOutcome::TurnPassed));
        assert_eq!(game.side_to_move(), Side::Light);
        assert_eq!(game.make_move_coords(5, 0, 4, 1), Ok(MoveOutcome::TurnPassed));
        assert_eq!(game.side_to_move(), Side::Dark);
        assert_eq!(game.move_history().len(), 2);
    }

    #[test]
    fn illegal_move_keeps_state() {
        let mut game = Game::new();
        let before = *game.board();
        let err = game.make_move_coords(5, 0, 4, 1).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove(_)));
        assert_eq!(*game.board(), before);
        assert_eq!(game.side_to_move(), Side::Dark);
        assert_eq!(game.make_move_coords(2, 1, 8, 0), Err(GameError::OffBoard));
    }

    #[test]
    fn chain_capture_keeps_turn() {
        let board = Board::from_layout(DOUBLE_JUMP).unwrap();
        let mut game = Game::from_board(board, Side::Dark);

        let outcome = game.make_move_coords(2, 1, 4, 3).unwrap();
        assert_eq!(outcome, MoveOutcome::ChainContinues(sq(4, 3)));
        assert_eq!(game.side_to_move(), Side::Dark);
        assert_eq!(game.pending_chain(), Some(sq(4, 3)));
        assert_eq!(
            game.legal_moves().as_slice(),
            &[Move::new(sq(4, 3), sq(6, 5))]
        );

        let outcome = game.make_move_coords(4, 3, 6, 5).unwrap();
        assert_eq!(outcome, MoveOutcome::TurnPassed);
        assert_eq!(game.side_to_move(), Side::Light);
        assert_eq!(game.pending_chain(), None);
        assert_eq!(game.board().piece_count(Side::Light), 1);
    }

    #[test]
    fn chain_must_use_same_piece() {
        let board = Board::from_layout(
            "
            ........
            ........
            .d.....d
            ..l.....
            ........
            ....l...
            ........
            ......l.
        ",
        )
        .unwrap();
        let mut game = Game::from_board(board, Side::Dark);
        game.make_move_coords(2, 1, 4, 3).unwrap();
        let err = game.make_move_coords(2, 7, 3, 6).unwrap_err();
        assert_eq!(err, GameError::IllegalMove(Move::new(sq(2, 7), sq(3, 6))));
    }

    #[test]
    fn capturing_last_piece_wins() {
        let board = Board::from_layout(
            "
            ........
            ........
            .d......
            ..l.....
            ........
            ........
            ........
            ........
        ",
        )
        .unwrap();
        let mut game = Game::from_board(board, Side::Dark);
        game.make_move_coords(2, 1, 4, 3).unwrap();
        assert_eq!(game.result(), Some(GameResult::DarkWins));
        assert_eq!(
            game.make_move_coords(4, 3, 5, 4),
            Err(GameError::GameAlreadyOver)
        );
    }

    #[test]
    fn blocked_side_loses() {
        // Light man on (7,0) faces a Dark man with a Dark man behind it
        let board = Board::from_layout(
            "
            ........
            ........
            ........
            ........
            ........
            ..d.....
            .d......
            l.......
        ",
        )
        .unwrap();
        let game = Game::from_board(board, Side::Light);
        assert_eq!(game.result(), Some(GameResult::DarkWins));
        assert_eq!(GameResult::DarkWins.loser(), Some(Side::Light));
    }

    #[test]
    fn ply_limit_draws() {
        let mut game = Game::new().with_ply_limit(2);
        game.make_move_coords(2, 1, 3, 0).unwrap();
        assert!(!game.is_game_over());
        game.make_move_coords(5, 0, 4, 1).unwrap();
        assert_eq!(game.result(), Some(GameResult::Draw));
    }

    #[test]
    fn promotion_during_chain() {
        // Dark jumps onto row 7, is crowned, and can then jump backward
        let board = Board::from_layout(
            "
            ........
            ........
            ........
            ........
            ........
            ..d.....
            ...l.l..
            ........
        ",
        )
        .unwrap();
        let mut game = Game::from_board(board, Side::Dark);
        let outcome = game.make_move_coords(5, 2, 7, 4).unwrap();
        assert_eq!(game.board().get(sq(7, 4)), Some(Piece::king(Side::Dark)));
        // Crowned, it can take (6,5) backward
        assert_eq!(outcome, MoveOutcome::ChainContinues(sq(7, 4)));
    }
}
