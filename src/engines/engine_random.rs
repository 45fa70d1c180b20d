//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing and opening randomisation.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{AmazonsError, AmazonsResult};
use crate::game_state::amazons_types::Board;
use crate::moves::amazon_move::Move;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible engine for tests and seeded matches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Amazons Random"
    }

    fn choose_move(&mut self, board: &Board, params: &GoParams) -> AmazonsResult<EngineOutput> {
        let legal_moves: Vec<Move> = board.legal_moves().collect();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine requested_depth {depth}"));
        }

        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or_else(|| AmazonsError::GameOver(board.turn().opposite()))?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::errors::AmazonsError;
    use crate::game_state::amazons_types::{Board, Piece, Side, Square};

    #[test]
    fn random_engine_picks_a_legal_move() {
        let board = Board::new();
        let mut engine = RandomEngine::new();
        let out = engine.choose_move(&board, &GoParams::default()).unwrap();
        let chosen = out.best_move.unwrap();
        assert!(board.is_legal_move(&chosen));
        assert_eq!(out.info_lines[0], "info string random_engine legal_moves 2176");
    }

    #[test]
    fn seeded_engines_agree() {
        let board = Board::new();
        let mut first = RandomEngine::with_seed(9);
        let mut second = RandomEngine::with_seed(9);
        for _ in 0..5 {
            let a = first.choose_move(&board, &GoParams::default()).unwrap();
            let b = second.choose_move(&board, &GoParams::default()).unwrap();
            assert_eq!(a.best_move, b.best_move);
        }
    }

    #[test]
    fn no_move_is_game_over() {
        let mut board = Board::new();
        for square in Square::all() {
            if board.get(square).is_empty() {
                board.put(Piece::Spear, square);
            }
        }
        let mut engine = RandomEngine::with_seed(1);
        let err = engine.choose_move(&board, &GoParams::default()).unwrap_err();
        assert_eq!(err, AmazonsError::GameOver(Side::Black));
    }
}
