//! Board coordinates with queen-move geometry.
//!
//! There are exactly 100 squares, indexed `row * 10 + col` with row 0 the
//! bottom rank and col 0 the leftmost file. A `Square` is a copyable index
//! into the fixed `SQUARES` table, so equality is an integer comparison and
//! no square is ever allocated after startup.

use std::fmt;
use std::str::FromStr;

use crate::errors::{AmazonsError, AmazonsResult};

/// Width and height of the board.
pub const SIZE: usize = 10;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = SIZE * SIZE;

/// A position on the board (`a1` = 0 .. `j10` = 99).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

/// Every square, by index.
pub static SQUARES: [Square; NUM_SQUARES] = build_squares();

static SQUARE_NAMES: [&str; NUM_SQUARES] = [
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1", "i1", "j1", //
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2", "i2", "j2", //
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3", "i3", "j3", //
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4", "i4", "j4", //
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5", "i5", "j5", //
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6", "i6", "j6", //
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7", "i7", "j7", //
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8", "i8", "j8", //
    "a9", "b9", "c9", "d9", "e9", "f9", "g9", "h9", "i9", "j9", //
    "a10", "b10", "c10", "d10", "e10", "f10", "g10", "h10", "i10", "j10",
];

const fn build_squares() -> [Square; NUM_SQUARES] {
    let mut table = [Square(0); NUM_SQUARES];
    let mut index = 0usize;

    while index < NUM_SQUARES {
        table[index] = Square(index as u8);
        index += 1;
    }

    table
}

impl Square {
    /// Compile-time lookup for fixed tables; `index` must be below 100.
    pub(crate) const fn from_index_const(index: usize) -> Square {
        assert!(index < NUM_SQUARES);
        Square(index as u8)
    }

    /// True iff `(col, row)` lies on the board.
    #[inline]
    pub const fn exists(col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && col < SIZE as i32 && row < SIZE as i32
    }

    /// The square at `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are off the board; use [`Square::try_at`]
    /// for unchecked input.
    #[inline]
    pub fn at(col: i32, row: i32) -> Square {
        match Self::try_at(col, row) {
            Ok(square) => square,
            Err(err) => panic!("{err}"),
        }
    }

    #[inline]
    pub fn try_at(col: i32, row: i32) -> AmazonsResult<Square> {
        if !Self::exists(col, row) {
            return Err(AmazonsError::SquareOutOfBounds { col, row });
        }
        Ok(SQUARES[row as usize * SIZE + col as usize])
    }

    /// The square with index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 100`.
    #[inline]
    pub fn from_index(index: usize) -> Square {
        match Self::try_from_index(index) {
            Ok(square) => square,
            Err(err) => panic!("{err}"),
        }
    }

    #[inline]
    pub fn try_from_index(index: usize) -> AmazonsResult<Square> {
        SQUARES
            .get(index)
            .copied()
            .ok_or(AmazonsError::InvalidSquareIndex(index))
    }

    /// The square named by separate column (`"d"`) and row (`"5"`) designations.
    pub fn from_col_row_text(col: &str, row: &str) -> AmazonsResult<Square> {
        let bad = || AmazonsError::InvalidSquareName(format!("{col}{row}"));

        let mut col_chars = col.chars();
        let col_index = match (col_chars.next(), col_chars.next()) {
            (Some(c @ 'a'..='j'), None) => c as i32 - 'a' as i32,
            _ => return Err(bad()),
        };

        if row.starts_with('0') || row.starts_with('+') {
            return Err(bad());
        }
        let row_number: i32 = row.parse().map_err(|_| bad())?;
        if !(1..=SIZE as i32).contains(&row_number) {
            return Err(bad());
        }

        Self::try_at(col_index, row_number - 1)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Column, 0 = file `a`.
    #[inline]
    pub const fn col(self) -> i32 {
        (self.0 as usize % SIZE) as i32
    }

    /// Row, 0 = rank `1`.
    #[inline]
    pub const fn row(self) -> i32 {
        (self.0 as usize / SIZE) as i32
    }

    /// Canonical designation, `a1` .. `j10`.
    #[inline]
    pub fn name(self) -> &'static str {
        SQUARE_NAMES[self.index()]
    }

    /// All squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        SQUARES.iter().copied()
    }

    /// True iff `to` is a nonzero straight or diagonal displacement away.
    pub fn is_queen_move(self, to: Square) -> bool {
        if self == to {
            return false;
        }
        let dcol = (to.col() - self.col()).abs();
        let drow = (to.row() - self.row()).abs();
        dcol == 0 || drow == 0 || dcol == drow
    }

    /// The square `steps > 0` squares away in direction `dir`, or `None` if
    /// that leaves the board.
    #[inline]
    pub fn queen_move(self, dir: Direction, steps: u8) -> Option<Square> {
        if steps == 0 {
            return None;
        }
        let (dcol, drow) = dir.delta();
        let col = self.col() + dcol * steps as i32;
        let row = self.row() + drow * steps as i32;
        Self::try_at(col, row).ok()
    }

    /// The square `steps` along `dir`, for a `steps` already known to be
    /// within the ray length from `QUEEN_RAY_LENGTHS`.
    #[inline]
    pub(crate) fn step_within_ray(self, dir: Direction, steps: u8) -> Square {
        let (dcol, drow) = dir.delta();
        let offset = (drow * SIZE as i32 + dcol) * steps as i32;
        SQUARES[(self.0 as i32 + offset) as usize]
    }

    /// Direction of the queen move `self -> to`, or `None` if it is not one.
    pub fn direction(self, to: Square) -> Option<Direction> {
        if !self.is_queen_move(to) {
            return None;
        }
        let dcol = (to.col() - self.col()).signum();
        let drow = (to.row() - self.row()).signum();
        Direction::ALL
            .into_iter()
            .find(|dir| dir.delta() == (dcol, drow))
    }

    /// Number of squares strictly between `self` and `to` plus one, for a
    /// queen move.
    #[inline]
    pub fn queen_distance(self, to: Square) -> u8 {
        (to.col() - self.col())
            .abs()
            .max((to.row() - self.row()).abs()) as u8
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Square {
    type Err = AmazonsError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if !text.is_ascii() || text.len() < 2 {
            return Err(AmazonsError::InvalidSquareName(text.to_owned()));
        }
        let (col, row) = text.split_at(1);
        Square::from_col_row_text(col, row)
            .map_err(|_| AmazonsError::InvalidSquareName(text.to_owned()))
    }
}

/// The eight compass directions, numbered clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

/// `(dcol, drow)` unit steps, indexed by direction number.
const DIRECTION_DELTAS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: u8) -> AmazonsResult<Direction> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(AmazonsError::InvalidDirection(index))
    }

    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        DIRECTION_DELTAS[self as usize]
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        Self::ALL[(self as usize + 4) % 8]
    }
}
