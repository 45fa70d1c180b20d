//! Make/undo on a `Board`, plus a scoped guard for search.
//!
//! A move performs exactly three cell writes (origin emptied, queen placed,
//! spear planted), pushes the move on the history and flips the turn. Undo
//! reverses those steps in the opposite order, so the spear is lifted before
//! the queen returns; this matters when the arrow landed on the origin.

use std::ops::{Deref, DerefMut};

use crate::errors::{AmazonsError, AmazonsResult};
use crate::game_state::amazons_types::{Board, Piece, Square};
use crate::moves::amazon_move::Move;

impl Board {
    /// Apply `from -> to`, arrow to `spear`, for the side to move.
    pub fn make_move_at(
        &mut self,
        from: Square,
        to: Square,
        spear: Square,
    ) -> AmazonsResult<()> {
        self.make_move(Move::new(from, to, spear))
    }

    /// Apply `mv` if it is legal; an illegal move leaves the board untouched.
    pub fn make_move(&mut self, mv: Move) -> AmazonsResult<()> {
        if !self.is_legal_move(&mv) {
            return Err(AmazonsError::IllegalMove(format!(
                "{mv} ({} to move)",
                self.turn()
            )));
        }
        self.apply_unchecked(mv);
        Ok(())
    }

    /// Undo the most recent move, returning it.
    pub fn undo(&mut self) -> AmazonsResult<Move> {
        let mv = self.history.pop().ok_or(AmazonsError::NothingToUndo)?;
        let queen = self.get(mv.to);
        self.put(Piece::Empty, mv.spear);
        self.put(Piece::Empty, mv.to);
        self.put(queen, mv.from);
        self.flip_turn();
        Ok(mv)
    }

    /// Apply a legal move and return a guard that undoes it when dropped.
    ///
    /// The caller must only pass moves produced by `legal_moves` on this board.
    pub fn play_scoped(&mut self, mv: Move) -> MoveGuard<'_> {
        debug_assert!(self.is_legal_move(&mv), "scoped move {mv} is illegal");
        self.apply_unchecked(mv);
        MoveGuard { board: self }
    }

    pub(crate) fn apply_unchecked(&mut self, mv: Move) {
        let queen = self.turn().queen();
        self.put(Piece::Empty, mv.from);
        self.put(queen, mv.to);
        self.put(Piece::Spear, mv.spear);
        self.history.push(mv);
        self.flip_turn();
    }
}

/// Exclusive access to a board with one extra move applied.
///
/// Dropping the guard undoes the move, so every exit from a search node,
/// including cutoffs and deadline aborts, restores the parent position.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        let undone = self.board.undo();
        debug_assert!(undone.is_ok(), "scoped undo with empty history");
    }
}
