//! Self-play game execution.
//!
//! [`MatchRunner`] plays one game between two searchers through a
//! [`Game`], letting the side on move continue chain captures hop by hop,
//! and keeps a separate [`SearchReport`] for each side.

use checkers_core::{Move, Side};
use checkers_engine::{Game, GameError, GameResult, MoveOutcome};
use checkers_search::{Score, SearchReport, Searcher};
use serde::Serialize;
use std::time::Instant;
use thiserror::Error;

use crate::config::ArenaConfig;

/// Errors that can occur while running a game.
#[derive(Error, Debug)]
pub enum RunError {
    /// The game rejected a move chosen by search.
    #[error("Game error: {0}")]
    Game(#[from] GameError),
    /// Search found no move although the game was still running.
    #[error("No move found for {0}")]
    NoMove(Side),
}

/// One hop with the search figures that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    pub side: Side,
    #[serde(rename = "move")]
    pub mv: Move,
    pub score: Score,
    pub nodes_expanded: u64,
    pub nodes_pruned: u64,
    /// True when the same side must jump again after this hop.
    pub chain_continues: bool,
}

/// The outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Dark,
    Light,
    Draw,
}

impl From<GameResult> for Outcome {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::DarkWins => Outcome::Dark,
            GameResult::LightWins => Outcome::Light,
            GameResult::Draw => Outcome::Draw,
        }
    }
}

/// Everything recorded about a finished game.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub outcome: Outcome,
    pub plies: usize,
    pub dark: SearchReport,
    pub light: SearchReport,
    pub moves: Vec<MoveRecord>,
    pub final_board: String,
}

/// Plays games between two fixed-depth searchers.
pub struct MatchRunner {
    dark: Searcher,
    light: Searcher,
    max_plies: usize,
}

impl MatchRunner {
    pub fn new(config: &ArenaConfig) -> Self {
        MatchRunner {
            dark: Searcher::new(config.dark_depth),
            light: Searcher::new(config.light_depth),
            max_plies: config.max_plies,
        }
    }

    fn searcher(&self, side: Side) -> &Searcher {
        match side {
            Side::Dark => &self.dark,
            Side::Light => &self.light,
        }
    }

    /// Plays a full game from the starting position.
    pub fn play(&self) -> Result<GameSummary, RunError> {
        self.play_from(Game::new().with_ply_limit(self.max_plies))
    }

    /// Plays an already set-up game to the end.
    pub fn play_from(&self, mut game: Game) -> Result<GameSummary, RunError> {
        let mut reports = [SearchReport::new(), SearchReport::new()];
        let mut moves = Vec::new();

        while !game.is_game_over() {
            let side = game.side_to_move();
            let searcher = self.searcher(side);

            let start = Instant::now();
            let result = match game.pending_chain() {
                Some(from) => searcher.search_continuation(game.board(), side, from),
                None => searcher.search(game.board(), side),
            };
            let elapsed = start.elapsed();

            let report = &mut reports[side.index()];
            report.record_search(&result.stats, elapsed);

            let mv = result.best_move.ok_or(RunError::NoMove(side))?;
            let outcome = game.make_move(mv)?;
            report.record_move();

            let chain_continues = matches!(outcome, MoveOutcome::ChainContinues(_));
            tracing::info!(
                ply = game.ply_count(),
                %side,
                %mv,
                score = result.score,
                expanded = result.stats.nodes_expanded,
                pruned = result.stats.nodes_pruned,
                chain = chain_continues,
                "move"
            );
            moves.push(MoveRecord {
                side,
                mv,
                score: result.score,
                nodes_expanded: result.stats.nodes_expanded,
                nodes_pruned: result.stats.nodes_pruned,
                chain_continues,
            });
        }

        let outcome = game.result().map(Outcome::from).unwrap_or(Outcome::Draw);
        let [dark, light] = reports;
        Ok(GameSummary {
            outcome,
            plies: game.ply_count(),
            dark,
            light,
            moves,
            final_board: game.board().to_layout(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_engine::Board;

    fn config(dark_depth: u32, light_depth: u32, max_plies: usize) -> ArenaConfig {
        ArenaConfig {
            dark_depth,
            light_depth,
            max_plies,
        }
    }

    #[test]
    fn test_game_runs_to_an_outcome() {
        let runner = MatchRunner::new(&config(2, 1, 120));
        let summary = runner.play().unwrap();
        assert!(summary.plies <= 120);
        assert_eq!(summary.moves.len(), summary.plies);
        assert_eq!(
            summary.dark.total_moves + summary.light.total_moves,
            summary.plies as u64
        );
        assert_eq!(summary.moves[0].side, Side::Dark);
    }

    #[test]
    fn test_self_play_is_deterministic() {
        let runner = MatchRunner::new(&config(2, 2, 60));
        let a = runner.play().unwrap();
        let b = runner.play().unwrap();
        let moves_a: Vec<Move> = a.moves.iter().map(|r| r.mv).collect();
        let moves_b: Vec<Move> = b.moves.iter().map(|r| r.mv).collect();
        assert_eq!(moves_a, moves_b);
        assert_eq!(a.outcome, b.outcome);
    }

    #[test]
    fn test_chain_capture_is_completed_by_same_side() {
        let board = Board::from_layout(
            "
            ........
            ........
            .d......
            ..l.....
            ........
            ....l...
            ........
            ......l.
        ",
        )
        .unwrap();
        let runner = MatchRunner::new(&config(1, 1, 50));
        let summary = runner
            .play_from(Game::from_board(board, Side::Dark).with_ply_limit(50))
            .unwrap();

        assert_eq!(summary.moves[0].side, Side::Dark);
        assert!(summary.moves[0].chain_continues);
        assert_eq!(summary.moves[1].side, Side::Dark);
        assert_eq!(summary.moves[1].mv.from, summary.moves[0].mv.to);
        assert!(summary.moves[1].mv.is_jump());
        assert_eq!(summary.moves[2].side, Side::Light);
    }

    #[test]
    fn test_finished_game_plays_nothing() {
        let board = Board::from_layout(
            "
            ........
            ........
            ........
            ....d...
            ........
            ........
            ........
            ........
        ",
        )
        .unwrap();
        let runner = MatchRunner::new(&ArenaConfig::default());
        let summary = runner.play_from(Game::from_board(board, Side::Light)).unwrap();
        assert_eq!(summary.outcome, Outcome::Dark);
        assert_eq!(summary.plies, 0);
        assert_eq!(summary.dark.searches, 0);
    }
}
