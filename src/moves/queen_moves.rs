use crate::game_state::square::{Direction, Square, NUM_SQUARES, SIZE};

/// `QUEEN_RAY_LENGTHS[square][dir]` is the number of on-board squares from
/// `square` toward `dir`, before any blocking.
pub const QUEEN_RAY_LENGTHS: [[u8; 8]; NUM_SQUARES] = generate_queen_ray_lengths();

/// Squares along one ray from `from`, nearest first, ignoring occupancy.
#[inline]
pub fn queen_ray(from: Square, dir: Direction) -> impl Iterator<Item = Square> {
    let length = QUEEN_RAY_LENGTHS[from.index()][dir.index()];
    (1..=length).map(move |steps| from.step_within_ray(dir, steps))
}

/// Squares strictly between `from` and `to` on a queen move.
pub fn squares_between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let dir = from.direction(to);
    let gap = from.queen_distance(to);
    dir.into_iter()
        .flat_map(move |dir| (1..gap).filter_map(move |steps| from.queen_move(dir, steps)))
}

const fn generate_queen_ray_lengths() -> [[u8; 8]; NUM_SQUARES] {
    let mut table = [[0u8; 8]; NUM_SQUARES];
    let mut sq = 0usize;

    while sq < NUM_SQUARES {
        let col = (sq % SIZE) as i32;
        let row = (sq / SIZE) as i32;
        let mut dir = 0usize;
        while dir < 8 {
            let (dcol, drow) = Direction::ALL[dir].delta();
            let mut steps = 0u8;
            let mut c = col + dcol;
            let mut r = row + drow;
            while Square::exists(c, r) {
                steps += 1;
                c += dcol;
                r += drow;
            }
            table[sq][dir] = steps;
            dir += 1;
        }
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{queen_ray, squares_between, QUEEN_RAY_LENGTHS};
    use crate::game_state::square::{Direction, Square};

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn queen_rays_from_e5_cover_thirty_five_squares() {
        let total: u32 = QUEEN_RAY_LENGTHS[sq("e5").index()]
            .iter()
            .map(|&n| n as u32)
            .sum();
        assert_eq!(total, 35);
    }

    #[test]
    fn corner_rays_cover_three_directions() {
        let lengths = QUEEN_RAY_LENGTHS[sq("a1").index()];
        assert_eq!(lengths[Direction::North.index()], 9);
        assert_eq!(lengths[Direction::NorthEast.index()], 9);
        assert_eq!(lengths[Direction::East.index()], 9);
        assert_eq!(lengths[Direction::South.index()], 0);
        assert_eq!(lengths[Direction::NorthWest.index()], 0);
    }

    #[test]
    fn ray_runs_to_the_edge_in_order() {
        let ray: Vec<Square> = queen_ray(sq("g7"), Direction::NorthEast).collect();
        assert_eq!(ray, vec![sq("h8"), sq("i9"), sq("j10")]);
    }

    #[test]
    fn between_excludes_endpoints() {
        let between: Vec<Square> = squares_between(sq("d1"), sq("d5")).collect();
        assert_eq!(between, vec![sq("d2"), sq("d3"), sq("d4")]);
        assert_eq!(squares_between(sq("d1"), sq("d2")).count(), 0);
        assert_eq!(squares_between(sq("d1"), sq("e3")).count(), 0);
    }

    #[test]
    fn ray_lengths_match_checked_queen_moves() {
        for square in Square::all() {
            for dir in Direction::ALL {
                let length = QUEEN_RAY_LENGTHS[square.index()][dir.index()];
                for steps in 1..=length {
                    assert_eq!(
                        Some(square.step_within_ray(dir, steps)),
                        square.queen_move(dir, steps),
                        "{square} {dir:?} {steps}"
                    );
                }
                assert_eq!(square.queen_move(dir, length + 1), None, "{square} {dir:?}");
            }
        }
    }
}
