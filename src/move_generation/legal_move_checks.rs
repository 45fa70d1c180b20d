//! Legality predicates shared by search and move entry.
//!
//! Each check refines the previous one: a legal piece, then a legal queen
//! slide, then a legal arrow shot from the queen's new square. All are
//! read-only.

use crate::game_state::amazons_types::{Board, Square};
use crate::moves::amazon_move::Move;
use crate::moves::queen_moves::squares_between;

impl Board {
    /// True iff `to` is a queen move from `from` with every intermediate
    /// square empty and `to` either empty or equal to `ignoring`.
    ///
    /// `ignoring` is the square a queen has just vacated, so the arrow shot
    /// may pass over or land on it.
    pub fn is_unblocked_move(
        &self,
        from: Square,
        to: Square,
        ignoring: Option<Square>,
    ) -> bool {
        if !from.is_queen_move(to) {
            return false;
        }
        let passable = |square: Square| self.get(square).is_empty() || Some(square) == ignoring;
        squares_between(from, to).all(passable) && passable(to)
    }

    /// True iff `from` holds a queen of the side to move.
    #[inline]
    pub fn is_legal_piece(&self, from: Square) -> bool {
        self.get(from) == self.turn().queen()
    }

    /// True iff the side to move may slide a queen `from -> to`.
    #[inline]
    pub fn is_legal_slide(&self, from: Square, to: Square) -> bool {
        self.is_legal_piece(from) && self.is_unblocked_move(from, to, None)
    }

    /// True iff `from -> to` is a legal slide and the arrow can then be shot
    /// `to -> spear`, treating the vacated `from` as open.
    #[inline]
    pub fn is_legal(&self, from: Square, to: Square, spear: Square) -> bool {
        self.is_legal_slide(from, to) && self.is_unblocked_move(to, spear, Some(from))
    }

    #[inline]
    pub fn is_legal_move(&self, mv: &Move) -> bool {
        self.is_legal(mv.from, mv.to, mv.spear)
    }
}
