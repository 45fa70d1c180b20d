//! Time-management strategies for per-move budgeting.
//!
//! Callers pass raw clock data (`wtime/btime/winc/binc/movetime`) and the
//! engine decides the final per-move allocation based on strategy.

use crate::engines::engine_trait::GoParams;
use crate::game_state::amazons_types::{Board, Piece, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeManagementStrategy {
    /// Spend 1/20th of the remaining clock.
    Fraction20,
    /// Divide the clock over the moves the open board can still hold.
    Adaptive,
}

/// Fill in `movetime_ms` from clock data when it is not given explicitly.
///
/// Without clock data for the side to move the parameters come back as they
/// were, leaving the engine's own default in charge.
pub fn resolve_go_params(
    board: &Board,
    params: &GoParams,
    strategy: TimeManagementStrategy,
) -> GoParams {
    if params.movetime_ms.is_some() {
        return params.clone();
    }

    let mut resolved = params.clone();
    let (remaining_opt, inc_opt) = match board.turn() {
        Side::White => (params.wtime_ms, params.winc_ms),
        Side::Black => (params.btime_ms, params.binc_ms),
    };

    if let Some(remaining) = remaining_opt {
        resolved.movetime_ms = Some(match strategy {
            TimeManagementStrategy::Fraction20 => (remaining / 20).max(1),
            TimeManagementStrategy::Adaptive => adaptive_budget_ms(board, remaining, inc_opt),
        });
    }

    resolved
}

fn adaptive_budget_ms(board: &Board, remaining_ms: u64, inc_ms: Option<u64>) -> u64 {
    // Every move fills a cell, so the empty cells bound the game length; in
    // practice territory closes off well before that.
    let empty = board.count(Piece::Empty) as u64;
    let expected_moves_left = (empty / 4).max(4);

    let reserve = (remaining_ms / 25).clamp(50, remaining_ms.saturating_sub(1).max(50));
    let usable = remaining_ms.saturating_sub(reserve);
    let base = usable / expected_moves_left;
    let inc_bonus = inc_ms.unwrap_or(0).saturating_mul(3) / 4;
    let target = base.saturating_add(inc_bonus);

    let max_budget = (remaining_ms / 4).max(1);
    target.clamp(1, max_budget)
}

#[cfg(test)]
mod tests {
    use super::{resolve_go_params, TimeManagementStrategy};
    use crate::engines::engine_trait::GoParams;
    use crate::game_state::amazons_types::{Board, Side};

    #[test]
    fn explicit_movetime_wins() {
        let params = GoParams {
            movetime_ms: Some(250),
            wtime_ms: Some(60_000),
            ..GoParams::default()
        };
        let resolved = resolve_go_params(&Board::new(), &params, TimeManagementStrategy::Adaptive);
        assert_eq!(resolved, params);
    }

    #[test]
    fn fraction_uses_the_clock_of_the_side_to_move() {
        let params = GoParams {
            wtime_ms: Some(20_000),
            btime_ms: Some(4_000),
            ..GoParams::default()
        };
        let mut board = Board::new();

        let white = resolve_go_params(&board, &params, TimeManagementStrategy::Fraction20);
        assert_eq!(white.movetime_ms, Some(1_000));

        board.set_turn(Side::Black);
        let black = resolve_go_params(&board, &params, TimeManagementStrategy::Fraction20);
        assert_eq!(black.movetime_ms, Some(200));
    }

    #[test]
    fn adaptive_budget_stays_within_a_quarter_of_the_clock() {
        let board = Board::new();
        for remaining in [10u64, 900, 30_000, 600_000] {
            let params = GoParams {
                wtime_ms: Some(remaining),
                winc_ms: Some(500),
                ..GoParams::default()
            };
            let budget = resolve_go_params(&board, &params, TimeManagementStrategy::Adaptive)
                .movetime_ms
                .unwrap();
            assert!(budget >= 1, "budget {budget} for {remaining}");
            assert!(budget <= (remaining / 4).max(1), "budget {budget} for {remaining}");
        }
    }

    #[test]
    fn missing_clock_leaves_params_untouched() {
        let params = GoParams {
            btime_ms: Some(5_000),
            depth: Some(3),
            ..GoParams::default()
        };
        let resolved = resolve_go_params(&Board::new(), &params, TimeManagementStrategy::Adaptive);
        assert_eq!(resolved.movetime_ms, None);
        assert_eq!(resolved.depth, Some(3));
    }
}
