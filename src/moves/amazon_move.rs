//! The Amazons move value: a queen slide followed by an arrow shot.
//!
//! Text form is three square designations separated by spaces
//! (`d1 d7 d5`: queen `d1 -> d7`, arrow lands on `d5`). Parsing also accepts
//! the dashed form `d1-d7(d5)`.

use std::fmt;
use std::str::FromStr;

use crate::errors::{AmazonsError, AmazonsResult};
use crate::game_state::square::Square;

/// Queen slides `from -> to`, then shoots an arrow `to -> spear`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub spear: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, spear: Square) -> Self {
        Self { from, to, spear }
    }

    /// Parse `from to spear` or `from-to(spear)`.
    pub fn parse(text: &str) -> AmazonsResult<Move> {
        let bad = || AmazonsError::InvalidMoveText(text.to_owned());
        let trimmed = text.trim();

        let parts: Vec<&str> = if let Some((from, rest)) = trimmed.split_once('-') {
            let (to, spear) = rest
                .strip_suffix(')')
                .and_then(|inner| inner.split_once('('))
                .ok_or_else(bad)?;
            vec![from, to, spear]
        } else {
            trimmed.split_whitespace().collect()
        };

        match parts.as_slice() {
            [from, to, spear] => Ok(Move::new(
                from.parse().map_err(|_| bad())?,
                to.parse().map_err(|_| bad())?,
                spear.parse().map_err(|_| bad())?,
            )),
            _ => Err(bad()),
        }
    }

    /// The move in dashed form, `d1-d7(d5)`.
    pub fn to_dashed(&self) -> String {
        format!("{}-{}({})", self.from, self.to, self.spear)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.from, self.to, self.spear)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

impl FromStr for Move {
    type Err = AmazonsError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Move::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::errors::AmazonsError;
    use crate::game_state::square::Square;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn parses_spaced_and_dashed_forms() {
        let expected = Move::new(sq("d1"), sq("d7"), sq("d5"));
        assert_eq!(Move::parse("d1 d7 d5").unwrap(), expected);
        assert_eq!(Move::parse("  d1   d7 d5 ").unwrap(), expected);
        assert_eq!(Move::parse("d1-d7(d5)").unwrap(), expected);
        assert_eq!("j10 a1 j10".parse::<Move>().unwrap().from, sq("j10"));
    }

    #[test]
    fn formats_as_three_designations() {
        let mv = Move::new(sq("a1"), sq("a4"), sq("a1"));
        assert_eq!(mv.to_string(), "a1 a4 a1");
        assert_eq!(mv.to_dashed(), "a1-a4(a1)");
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["", "d1 d7", "d1 d7 d5 d3", "d1 d7 k5", "d1-d7", "d1-d7(d5", "d1-(d5)"] {
            assert!(
                matches!(Move::parse(bad), Err(AmazonsError::InvalidMoveText(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn equality_is_structural() {
        let a = Move::parse("g1 g5 e3").unwrap();
        let b = Move::new(sq("g1"), sq("g5"), sq("e3"));
        assert_eq!(a, b);
        assert_ne!(a, Move::new(sq("g1"), sq("g5"), sq("e7")));
    }
}
