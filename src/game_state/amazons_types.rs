//! Core value types shared by the board, move generation and search.
//!
//! A cell holds exactly one `Piece`; queens carry their side, arrows do not.
use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::square::{Direction, Square, SIZE};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// The queen piece belonging to this side.
    #[inline]
    pub const fn queen(self) -> Piece {
        match self {
            Side::White => Piece::WhiteQueen,
            Side::Black => Piece::BlackQueen,
        }
    }

    /// Score sign for this side: White maximizes, Black minimizes.
    #[inline]
    pub const fn sense(self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    WhiteQueen,
    BlackQueen,
    Spear,
}

impl Piece {
    /// The side owning this piece, if it is a queen.
    #[inline]
    pub const fn side(self) -> Option<Side> {
        match self {
            Piece::WhiteQueen => Some(Side::White),
            Piece::BlackQueen => Some(Side::Black),
            Piece::Empty | Piece::Spear => None,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// Single-character diagram symbol.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::WhiteQueen => 'W',
            Piece::BlackQueen => 'B',
            Piece::Spear => 'S',
        }
    }

    #[inline]
    pub const fn from_symbol(symbol: char) -> Option<Piece> {
        match symbol {
            '-' => Some(Piece::Empty),
            'W' => Some(Piece::WhiteQueen),
            'B' => Some(Piece::BlackQueen),
            'S' => Some(Piece::Spear),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::{Piece, Side};

    #[test]
    fn opposite_side_flips() {
        assert_eq!(Side::White.opposite(), Side::Black);
        assert_eq!(Side::Black.opposite(), Side::White);
        assert_eq!(Side::White.sense(), -Side::Black.sense());
    }

    #[test]
    fn queen_pieces_know_their_side() {
        assert_eq!(Side::White.queen().side(), Some(Side::White));
        assert_eq!(Side::Black.queen().side(), Some(Side::Black));
        assert_eq!(Piece::Spear.side(), None);
        assert_eq!(Piece::Empty.side(), None);
    }

    #[test]
    fn symbols_map_back_to_pieces() {
        for piece in [Piece::Empty, Piece::WhiteQueen, Piece::BlackQueen, Piece::Spear] {
            assert_eq!(Piece::from_symbol(piece.symbol()), Some(piece));
        }
        assert_eq!(Piece::from_symbol('x'), None);
    }
}
