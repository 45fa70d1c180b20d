//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different move
//! pickers can be selected at runtime behind a single trait interface, plus
//! the automated-player entry point that applies an engine's choice.

use tracing::info;

use crate::errors::{AmazonsError, AmazonsResult};
use crate::game_state::amazons_types::Board;
use crate::moves::amazon_move::Move;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
    pub wtime_ms: Option<u64>,
    pub btime_ms: Option<u64>,
    pub winc_ms: Option<u64>,
    pub binc_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> AmazonsResult<()> {
        Ok(())
    }

    /// Pick a move for the side to move on `board` without mutating it.
    fn choose_move(&mut self, board: &Board, params: &GoParams) -> AmazonsResult<EngineOutput>;
}

/// Let `engine` play one move on `board`.
///
/// Returns the move and its text form. Fails with `GameOver` if the side to
/// move is already lost, and with `IllegalMove` if the engine produces no
/// move or one the board rejects; the board is unchanged on failure.
pub fn play_engine_move(
    engine: &mut dyn Engine,
    board: &mut Board,
    params: &GoParams,
) -> AmazonsResult<(Move, String)> {
    if let Some(winner) = board.winner() {
        return Err(AmazonsError::GameOver(winner));
    }

    let output = engine.choose_move(board, params)?;
    let mv = output.best_move.ok_or_else(|| {
        AmazonsError::IllegalMove(format!("{} returned no move", engine.name()))
    })?;
    board.make_move(mv)?;

    let text = mv.to_string();
    info!(engine = engine.name(), side = %board.turn().opposite(), mv = %text, "engine move");
    Ok((mv, text))
}

#[cfg(test)]
mod tests {
    use super::{play_engine_move, Engine, EngineOutput, GoParams};
    use crate::errors::{AmazonsError, AmazonsResult};
    use crate::game_state::amazons_types::{Board, Side};
    use crate::moves::amazon_move::Move;
    use crate::utils::board_text::parse_board;

    struct FixedEngine(Option<Move>);

    impl Engine for FixedEngine {
        fn name(&self) -> &str {
            "fixed"
        }

        fn choose_move(&mut self, _board: &Board, _params: &GoParams) -> AmazonsResult<EngineOutput> {
            Ok(EngineOutput {
                best_move: self.0,
                info_lines: Vec::new(),
            })
        }
    }

    #[test]
    fn engine_move_is_applied_and_reported() {
        let mut board = Board::new();
        let mut engine = FixedEngine(Some("g1 g7 c3".parse().unwrap()));

        let (mv, text) = play_engine_move(&mut engine, &mut board, &GoParams::default()).unwrap();
        assert_eq!(text, "g1 g7 c3");
        assert_eq!(board.history(), &[mv]);
        assert_eq!(board.turn(), Side::Black);
    }

    #[test]
    fn bad_engine_output_leaves_the_board_alone() {
        let mut board = Board::new();
        let before = board.clone();

        let mut illegal = FixedEngine(Some("d1 d10 d5".parse().unwrap()));
        assert!(matches!(
            play_engine_move(&mut illegal, &mut board, &GoParams::default()),
            Err(AmazonsError::IllegalMove(_))
        ));

        let mut silent = FixedEngine(None);
        assert!(matches!(
            play_engine_move(&mut silent, &mut board, &GoParams::default()),
            Err(AmazonsError::IllegalMove(_))
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn finished_game_reports_the_winner() {
        let mut board = parse_board(
            "
            - - - - - - - - - -
            - - - - - - - - - -
            - - - - - - - - - -
            - - - - - - - - - -
            - - - - - - - - - -
            - - - - - - - - - -
            - - - - - - - - - -
            - - - - - - - - - -
            S S - - - - - - - -
            W S - - - - - - - B
            ",
            Side::White,
        )
        .unwrap();
        let mut engine = FixedEngine(None);

        let err = play_engine_move(&mut engine, &mut board, &GoParams::default()).unwrap_err();
        assert_eq!(err, AmazonsError::GameOver(Side::Black));
    }
}
