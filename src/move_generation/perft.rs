use crate::game_state::amazons_types::Board;
use crate::moves::amazon_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    /// Leaves where the side to move has no legal move.
    pub terminal: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.terminal += rhs.terminal;
    }
}

/// Count leaf positions of the legal-move tree `depth` plies deep.
///
/// Every leaf is played out so `terminal` is exact; for a bare move count at
/// depth one, `Board::count_legal_moves` is cheaper. Runs on a scratch copy;
/// `board` is left untouched.
pub fn perft(board: &Board, depth: u8) -> PerftCounts {
    let mut scratch = board.clone();
    perft_recurse(&mut scratch, depth)
}

fn perft_recurse(board: &mut Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            terminal: usize::from(!board.has_legal_move(board.turn())),
        };
    }

    let moves: Vec<Move> = board.legal_moves().collect();
    let mut total = PerftCounts::default();
    for mv in moves {
        let mut child = board.play_scoped(mv);
        total.merge(perft_recurse(&mut child, depth - 1));
    }
    total
}
