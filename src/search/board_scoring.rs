//! Pluggable board evaluation.
//!
//! Search stays independent of the heuristic by delegating leaf scoring to
//! `BoardScorer`. Scores are always from White's point of view: positive
//! favours White, negative favours Black.

use crate::game_state::amazons_types::{Board, Side};
use crate::game_state::square::NUM_SQUARES;

/// Magnitude of a game won on the spot; positive is a White win.
pub const WINNING_VALUE: i32 = i32::MAX - 1;
/// Search-window bound strictly beyond any real score.
pub const INFINITY: i32 = i32::MAX;
/// Heuristic scores stay at least this far inside `WINNING_VALUE`. A game
/// cannot outlast the empty cells, so every decided score is outside it.
pub const DECIDED_MARGIN: i32 = NUM_SQUARES as i32;

pub trait BoardScorer: Send + Sync {
    /// Score from White's perspective of a position where the side to move
    /// still has a legal move. Must stay within
    /// `WINNING_VALUE - DECIDED_MARGIN` in magnitude.
    fn score(&self, board: &Board) -> i32;
}

/// Score of a game won by `winner`, `ply` moves below the search root.
///
/// Nearer wins score higher, so the search prefers sealing the opponent now
/// over doing it later.
#[inline]
pub const fn decided_score(winner: Side, ply: u8) -> i32 {
    let magnitude = WINNING_VALUE - ply as i32;
    match winner {
        Side::White => magnitude,
        Side::Black => -magnitude,
    }
}

/// Mobility heuristic: the fewer moves Black has, the better for White.
///
/// Scores `WINNING_VALUE - DECIDED_MARGIN - black_moves`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobilityScorer;

impl BoardScorer for MobilityScorer {
    fn score(&self, board: &Board) -> i32 {
        let black_moves = board.count_legal_moves(Side::Black);
        let ceiling = WINNING_VALUE - DECIDED_MARGIN;
        ceiling - i32::try_from(black_moves).unwrap_or(ceiling)
    }
}
