//! Lazy enumeration of reachable squares and legal moves.
//!
//! Both iterators borrow the board immutably, so the borrow checker rules out
//! mutating a board while one of its sequences is still in flight. A fresh
//! call restarts the enumeration from the board's current state.

use std::iter::FusedIterator;
use std::vec;

use crate::game_state::amazons_types::{Board, Direction, Side, Square};
use crate::moves::amazon_move::Move;
use crate::moves::queen_moves::QUEEN_RAY_LENGTHS;

impl Board {
    /// Squares reachable from `from` by one unobstructed queen move, with
    /// `ignoring` treated as empty.
    #[inline]
    pub fn reachable_from(&self, from: Square, ignoring: Option<Square>) -> ReachableSquares<'_> {
        ReachableSquares::new(self, from, ignoring)
    }

    /// Every legal move for the side to move.
    #[inline]
    pub fn legal_moves(&self) -> LegalMoves<'_> {
        self.legal_moves_for(self.turn())
    }

    /// Every legal move `side` would have if it were to move now.
    pub fn legal_moves_for(&self, side: Side) -> LegalMoves<'_> {
        LegalMoves {
            board: self,
            queens: self.queens(side).collect::<Vec<_>>().into_iter(),
            destinations: None,
            spears: None,
        }
    }

    /// Number of legal moves for `side`, without building `Move` values.
    pub fn count_legal_moves(&self, side: Side) -> usize {
        self.queens(side)
            .map(|from| {
                self.reachable_from(from, None)
                    .map(|to| self.reachable_from(to, Some(from)).count())
                    .sum::<usize>()
            })
            .sum()
    }

    /// True iff `side` has at least one legal move.
    ///
    /// A queen with any open neighbour can step there and shoot back at the
    /// square it left, so only adjacent cells need checking.
    pub fn has_legal_move(&self, side: Side) -> bool {
        self.queens(side).any(|from| {
            Direction::ALL.into_iter().any(|dir| {
                from.queen_move(dir, 1)
                    .is_some_and(|next| self.get(next).is_empty())
            })
        })
    }
}

/// Ray-casting iterator over the squares one queen move away.
#[derive(Clone)]
pub struct ReachableSquares<'a> {
    board: &'a Board,
    from: Square,
    ignoring: Option<Square>,
    dir: usize,
    steps: u8,
}

impl<'a> ReachableSquares<'a> {
    pub fn new(board: &'a Board, from: Square, ignoring: Option<Square>) -> Self {
        Self {
            board,
            from,
            ignoring,
            dir: 0,
            steps: 0,
        }
    }
}

impl Iterator for ReachableSquares<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        while self.dir < Direction::ALL.len() {
            self.steps += 1;
            let length = QUEEN_RAY_LENGTHS[self.from.index()][self.dir];
            if self.steps <= length {
                let square = self.from.step_within_ray(Direction::ALL[self.dir], self.steps);
                if self.board.get(square).is_empty() || Some(square) == self.ignoring {
                    return Some(square);
                }
            }
            // Off the board or blocked: this ray is finished.
            self.dir += 1;
            self.steps = 0;
        }
        None
    }
}

impl FusedIterator for ReachableSquares<'_> {}

/// Nested queen / destination / arrow enumeration of legal moves.
pub struct LegalMoves<'a> {
    board: &'a Board,
    queens: vec::IntoIter<Square>,
    destinations: Option<(Square, ReachableSquares<'a>)>,
    spears: Option<(Square, Square, ReachableSquares<'a>)>,
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            if let Some((from, to, spears)) = self.spears.as_mut() {
                if let Some(spear) = spears.next() {
                    return Some(Move::new(*from, *to, spear));
                }
                self.spears = None;
            }

            if let Some((from, destinations)) = self.destinations.as_mut() {
                if let Some(to) = destinations.next() {
                    let from = *from;
                    self.spears = Some((from, to, self.board.reachable_from(to, Some(from))));
                    continue;
                }
                self.destinations = None;
            }

            let from = self.queens.next()?;
            self.destinations = Some((from, self.board.reachable_from(from, None)));
        }
    }
}

impl FusedIterator for LegalMoves<'_> {}
