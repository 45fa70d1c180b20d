//! Parser for the plain board diagram printed by `Board`'s `Display`.
//!
//! A diagram is ten non-blank lines, top rank (row 10) first, each holding ten
//! cell symbols (`-`, `W`, `B`, `S`) separated by whitespace. Leading
//! indentation and blank lines are ignored, so diagrams can be written inline
//! in tests.

use crate::errors::{AmazonsError, AmazonsResult};
use crate::game_state::amazons_types::{Board, Piece, Side, Square, SIZE};

/// Build a board from a diagram with `turn` to move and an empty history.
pub fn parse_board(diagram: &str, turn: Side) -> AmazonsResult<Board> {
    let rows: Vec<&str> = diagram
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if rows.len() != SIZE {
        return Err(AmazonsError::InvalidBoardText(format!(
            "expected {SIZE} rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    board.set_turn(turn);

    for (line_index, line) in rows.iter().enumerate() {
        let row = (SIZE - 1 - line_index) as i32;
        let cells: Vec<&str> = line.split_whitespace().collect();
        if cells.len() != SIZE {
            return Err(AmazonsError::InvalidBoardText(format!(
                "row {} has {} cells: {line:?}",
                row + 1,
                cells.len()
            )));
        }

        for (col, cell) in cells.iter().enumerate() {
            let mut chars = cell.chars();
            let piece = match (chars.next(), chars.next()) {
                (Some(symbol), None) => Piece::from_symbol(symbol),
                _ => None,
            }
            .ok_or_else(|| {
                AmazonsError::InvalidBoardText(format!("unknown cell {cell:?} in row {}", row + 1))
            })?;
            board.put(piece, Square::at(col as i32, row));
        }
    }

    Ok(board)
}
