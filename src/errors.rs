//! Errors used throughout the Amazons engine.
//!
//! `AmazonsError` is the single error type returned by parsing, board setup,
//! checked move entry and the engine layer. Search timeouts and solved
//! positions are not errors; they are reported on `SearchResult`.
//!
//! Usage guidelines:
//! - Text parsing and checked move entry return `AmazonsResult<T>` so callers
//!   (a UI, a tool) can reject bad input without touching the board.
//! - The hot search path never produces errors: it only enumerates legal moves.
//! - `GameOver` means a caller asked for a move when the side to move has
//!   none; check `Board::winner` first.

use thiserror::Error;

use crate::game_state::amazons_types::Side;

/// Unified error type for the Amazons engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmazonsError {
    /// A `(col, row)` pair outside the 10x10 grid.
    #[error("square out of bounds: col {col}, row {row}")]
    SquareOutOfBounds { col: i32, row: i32 },

    /// A square index outside `0..100`.
    #[error("invalid square index: {0} (must be 0-99)")]
    InvalidSquareIndex(usize),

    /// Text that is not a square designation (`a1` .. `j10`).
    #[error("invalid square designation: {0:?}")]
    InvalidSquareName(String),

    /// A direction number outside `0..8`.
    #[error("invalid direction: {0} (must be 0-7)")]
    InvalidDirection(u8),

    /// Text that is not a move (`from to spear`).
    #[error("invalid move text: {0:?}")]
    InvalidMoveText(String),

    /// A well-formed move that the current position does not allow.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// `undo` called with an empty history.
    #[error("no moves to undo")]
    NothingToUndo,

    /// The side to move has no legal move; the payload is the winner.
    #[error("game is already over: {0} wins")]
    GameOver(Side),

    /// A board diagram that could not be parsed.
    #[error("invalid board text: {0}")]
    InvalidBoardText(String),

    /// An engine option with a value that could not be interpreted.
    #[error("invalid value {value:?} for option {name}")]
    InvalidOption { name: String, value: String },
}

/// Result type alias for Amazons engine operations.
pub type AmazonsResult<T> = Result<T, AmazonsError>;
