//! Mutable Amazons game state.
//!
//! `Board` is the sole holder of positional state: the contents of all 100
//! cells, the side to move and the stack of applied moves used for undo.
//! Legality, make/undo and move enumeration live in `move_generation` as
//! further `impl Board` blocks; this module holds the data and plain access.

use std::fmt;

use crate::errors::AmazonsResult;
use crate::game_state::amazons_types::{Piece, Side};
use crate::game_state::square::{Square, NUM_SQUARES, SIZE};
use crate::moves::amazon_move::Move;

/// Starting queens for White: d1, g1, a4, j4.
pub const WHITE_START: [Square; 4] = [
    sq_const(3, 0),
    sq_const(6, 0),
    sq_const(0, 3),
    sq_const(9, 3),
];
/// Starting queens for Black: d10, g10, a7, j7.
pub const BLACK_START: [Square; 4] = [
    sq_const(3, 9),
    sq_const(6, 9),
    sq_const(0, 6),
    sq_const(9, 6),
];

const fn sq_const(col: usize, row: usize) -> Square {
    Square::from_index_const(row * SIZE + col)
}

/// Full Amazons position with move history.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Piece; NUM_SQUARES],
    turn: Side,
    pub(crate) history: Vec<Move>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening position, White to move.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.clear();
        board
    }

    /// A board with every cell empty, White to move, no history.
    pub fn empty() -> Self {
        Self {
            cells: [Piece::Empty; NUM_SQUARES],
            turn: Side::White,
            history: Vec::new(),
        }
    }

    /// Reset to the standard opening position.
    pub fn clear(&mut self) {
        self.cells = [Piece::Empty; NUM_SQUARES];
        for square in WHITE_START {
            self.cells[square.index()] = Piece::WhiteQueen;
        }
        for square in BLACK_START {
            self.cells[square.index()] = Piece::BlackQueen;
        }
        self.turn = Side::White;
        self.history.clear();
    }

    /// Overwrite this board with an independent copy of `other`.
    pub fn copy_from(&mut self, other: &Board) {
        self.cells = other.cells;
        self.turn = other.turn;
        self.history.clone_from(&other.history);
    }

    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Set the side to move. Intended for position setup only.
    #[inline]
    pub fn set_turn(&mut self, side: Side) {
        self.turn = side;
    }

    #[inline]
    pub(crate) fn flip_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// Number of moves applied since setup.
    #[inline]
    pub fn num_moves(&self) -> usize {
        self.history.len()
    }

    /// Applied moves, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn get(&self, square: Square) -> Piece {
        self.cells[square.index()]
    }

    /// Contents at `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are off the board.
    #[inline]
    pub fn get_at(&self, col: i32, row: i32) -> Piece {
        self.get(Square::at(col, row))
    }

    /// Contents at a square given by designation, e.g. `"g1"`.
    pub fn get_named(&self, name: &str) -> AmazonsResult<Piece> {
        Ok(self.get(name.parse()?))
    }

    /// Overwrite a cell. Intended for position setup; gameplay goes through
    /// `make_move` / `undo`.
    #[inline]
    pub fn put(&mut self, piece: Piece, square: Square) {
        self.cells[square.index()] = piece;
    }

    /// Squares currently holding a queen of `side`, in index order.
    pub fn queens(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        let queen = side.queen();
        Square::all().filter(move |&square| self.cells[square.index()] == queen)
    }

    /// Number of cells holding `piece`.
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&cell| cell == piece).count()
    }

    /// The winning side, if the side to move has no legal move.
    pub fn winner(&self) -> Option<Side> {
        if self.has_legal_move(self.turn) {
            None
        } else {
            Some(self.turn.opposite())
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIZE as i32).rev() {
            write!(f, "  ")?;
            for col in 0..SIZE as i32 {
                write!(f, " {}", self.get_at(col, row))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(turn={}, moves={})", self.turn, self.num_moves())?;
        write!(f, "{self}")
    }
}
