//! Time-bounded iterative deepening over minimax with alpha-beta pruning.
//!
//! Each pass searches the whole tree to a fixed depth on a private copy of
//! the position. The deadline is checked at every leaf evaluation; when it
//! fires the pass unwinds through its `MoveGuard`s and the result of the
//! last completed pass is returned. Deepening also stops once a pass sees
//! only decided leaves, since the remaining game is then solved. Decided
//! leaves score higher the nearer they are to the root, so a solved search
//! picks the quickest win.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::errors::{AmazonsError, AmazonsResult};
use crate::game_state::amazons_types::{Board, Side};
use crate::moves::amazon_move::Move;
use crate::search::board_scoring::{decided_score, BoardScorer, INFINITY};

/// Wall-clock budget for one search when none is given.
pub const DEFAULT_MOVETIME_MS: u64 = 1100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Deepest pass to run; `None` deepens until time runs out.
    pub max_depth: Option<u8>,
    pub movetime_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            movetime_ms: DEFAULT_MOVETIME_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Root score from White's perspective.
    pub best_score: i32,
    /// Depth of the last completed pass; 0 if none completed.
    pub reached_depth: u8,
    /// Leaves evaluated across all passes.
    pub nodes: u64,
    pub elapsed_ms: u64,
    pub time_expired: bool,
    /// Every leaf of the last completed pass was a finished game.
    pub search_exhausted: bool,
}

/// Search `board` for the side to move.
///
/// `board` is only read; the search plays on its own clone. Fails with
/// `GameOver` when the side to move has no legal move.
pub fn iterative_deepening_search<S: BoardScorer>(
    board: &Board,
    scorer: &S,
    config: SearchConfig,
) -> AmazonsResult<SearchResult> {
    let started_at = Instant::now();
    if let Some(winner) = board.winner() {
        return Err(AmazonsError::GameOver(winner));
    }

    let mut search = AlphaBeta {
        scorer,
        deadline: started_at + Duration::from_millis(config.movetime_ms),
        nodes: 0,
        time_expired: false,
        heuristic_leaf: false,
    };
    let mut scratch = board.clone();
    let mut result = SearchResult::default();
    let max_depth = config.max_depth.unwrap_or(u8::MAX).max(1);

    for depth in 1..=max_depth {
        search.heuristic_leaf = false;
        let pass = search.root(&mut scratch, depth);

        if !pass.completed {
            // A cut-short first pass still offers its best move so far.
            if result.best_move.is_none() {
                if let Some((mv, score)) = pass.best {
                    result.best_move = Some(mv);
                    result.best_score = score;
                }
            }
            debug!(depth, nodes = search.nodes, "search pass aborted at deadline");
            break;
        }

        if let Some((mv, score)) = pass.best {
            result.best_move = Some(mv);
            result.best_score = score;
        }
        result.reached_depth = depth;
        debug!(
            depth,
            score = result.best_score,
            nodes = search.nodes,
            best = ?result.best_move,
            "search pass completed"
        );

        if !search.heuristic_leaf {
            result.search_exhausted = true;
            debug!(depth, "game tree solved");
            break;
        }
    }

    debug_assert!(scratch == *board, "search left its scratch board mutated");

    if result.best_move.is_none() {
        result.best_move = scratch.legal_moves().next();
    }

    result.nodes = search.nodes;
    result.time_expired = search.time_expired;
    result.elapsed_ms = started_at.elapsed().as_millis() as u64;
    Ok(result)
}

struct PassOutcome {
    best: Option<(Move, i32)>,
    completed: bool,
}

struct AlphaBeta<'s, S: BoardScorer> {
    scorer: &'s S,
    deadline: Instant,
    nodes: u64,
    time_expired: bool,
    heuristic_leaf: bool,
}

impl<S: BoardScorer> AlphaBeta<'_, S> {
    fn root(&mut self, board: &mut Board, depth: u8) -> PassOutcome {
        let sense = board.turn().sense();
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;

        // Materialized: the board is mutated while the moves are played.
        let moves: Vec<Move> = board.legal_moves().collect();
        for mv in moves {
            let score = self.min_max(&mut board.play_scoped(mv), depth - 1, 1, -sense, alpha, beta);
            let Some(score) = score else {
                return PassOutcome {
                    best,
                    completed: false,
                };
            };

            let improves = match best {
                None => true,
                Some((_, best_score)) if sense > 0 => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((mv, score));
            }

            if sense > 0 {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }

        PassOutcome {
            best,
            completed: true,
        }
    }

    /// Value of `board`, `ply` moves below the root, searched `depth` plies
    /// deep, or `None` once the deadline has passed.
    fn min_max(
        &mut self,
        board: &mut Board,
        depth: u8,
        ply: u8,
        sense: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> Option<i32> {
        let winner = board.winner();
        if depth == 0 || winner.is_some() {
            return self.evaluate(board, winner, ply);
        }

        let moves: Vec<Move> = board.legal_moves().collect();
        let mut best = -sense * INFINITY;
        for mv in moves {
            let child = &mut board.play_scoped(mv);
            let score = self.min_max(child, depth - 1, ply.saturating_add(1), -sense, alpha, beta)?;
            if sense > 0 {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta < alpha {
                break;
            }
        }
        Some(best)
    }

    fn evaluate(&mut self, board: &Board, winner: Option<Side>, ply: u8) -> Option<i32> {
        if Instant::now() >= self.deadline {
            self.time_expired = true;
            return None;
        }

        self.nodes += 1;
        match winner {
            Some(winner) => Some(decided_score(winner, ply)),
            None => {
                self.heuristic_leaf = true;
                Some(self.scorer.score(board))
            }
        }
    }
}
