//! Terminal-oriented Unicode board renderer.
//!
//! Adds file letters and rank numbers around the grid for self-play output
//! and diagnostics. The plain `Display` diagram stays parseable; this one is
//! for people.

use crate::game_state::amazons_types::{Board, Piece, SIZE};

/// Render the board with coordinates, top rank first.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    let files = "    a b c d e f g h i j";

    out.push_str(files);
    out.push('\n');

    for row in (0..SIZE as i32).rev() {
        out.push_str(&format!("{:>3} ", row + 1));

        for col in 0..SIZE as i32 {
            out.push(piece_to_unicode(board.get_at(col, row)));
            if col < SIZE as i32 - 1 {
                out.push(' ');
            }
        }

        out.push_str(&format!(" {}\n", row + 1));
    }

    out.push_str(files);
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match piece {
        Piece::Empty => '·',
        Piece::WhiteQueen => '♕',
        Piece::BlackQueen => '♛',
        Piece::Spear => '×',
    }
}
