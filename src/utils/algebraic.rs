//! Game records as move text.
//!
//! A record is one move per line in the `from to spear` form; blank lines and
//! `#` comments are skipped. Replaying a record checks every move against the
//! position it is played in.

use crate::errors::{AmazonsError, AmazonsResult};
use crate::game_state::amazons_types::Board;
use crate::moves::amazon_move::Move;

/// One move per line, oldest first.
pub fn format_game_record(moves: &[Move]) -> String {
    let mut out = String::new();
    for mv in moves {
        out.push_str(&mv.to_string());
        out.push('\n');
    }
    out
}

/// Parse a record into moves without checking legality.
pub fn parse_game_record(record: &str) -> AmazonsResult<Vec<Move>> {
    record
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(Move::parse)
        .collect()
}

/// Play a record from the standard opening.
pub fn replay_game_record(record: &str) -> AmazonsResult<Board> {
    let mut board = Board::new();
    for (ply, mv) in parse_game_record(record)?.into_iter().enumerate() {
        board
            .make_move(mv)
            .map_err(|err| AmazonsError::IllegalMove(format!("ply {}: {err}", ply + 1)))?;
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::{format_game_record, parse_game_record, replay_game_record};
    use crate::errors::AmazonsError;
    use crate::game_state::amazons_types::{Board, Piece, Side};

    #[test]
    fn records_replay_onto_a_fresh_board() {
        let record = "# opening\nd1 d7 d5\n\ng10 g3 c3  # reply\n";
        let board = replay_game_record(record).unwrap();

        assert_eq!(board.num_moves(), 2);
        assert_eq!(board.turn(), Side::White);
        assert_eq!(board.get_named("d7").unwrap(), Piece::WhiteQueen);
        assert_eq!(board.get_named("c3").unwrap(), Piece::Spear);
        assert_eq!(format_game_record(board.history()), "d1 d7 d5\ng10 g3 c3\n");
    }

    #[test]
    fn formatted_history_parses_back() {
        let mut board = Board::new();
        board.make_move("a4 a5 b5".parse().unwrap()).unwrap();
        let text = format_game_record(board.history());
        assert_eq!(parse_game_record(&text).unwrap(), board.history());
    }

    #[test]
    fn illegal_ply_is_reported_with_its_number() {
        let err = replay_game_record("d1 d7 d5\nd7 d8 d9\n").unwrap_err();
        match err {
            AmazonsError::IllegalMove(text) => assert!(text.starts_with("ply 2")),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(matches!(
            parse_game_record("d1 d7"),
            Err(AmazonsError::InvalidMoveText(_))
        ));
    }
}
