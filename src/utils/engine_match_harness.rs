//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other, with an optional
//! seeded random opening prefix, and aggregates series statistics.

use chrono::{DateTime, Local};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::info;

use crate::engines::engine_trait::{play_engine_move, Engine, GoParams};
use crate::errors::AmazonsResult;
use crate::game_state::amazons_types::{Board, Side};
use crate::moves::amazon_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win(Side),
    /// Stopped at `max_plies` with both sides still able to move.
    Unfinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, side: Side },
    Unfinished,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 100,
            opening_min_plies: 0,
            opening_max_plies: 4,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<Move>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesStats {
    pub started_at: DateTime<Local>,
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub unfinished: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    fn new(games: u16) -> Self {
        Self {
            started_at: Local::now(),
            games,
            player1_wins: 0,
            player2_wins: 0,
            unfinished: 0,
            outcomes: Vec::new(),
            player1_moves: 0,
            player2_moves: 0,
            player1_total_time_ns: 0,
            player2_total_time_ns: 0,
            player1_avg_move_time_ms: 0.0,
            player2_avg_move_time_ms: 0.0,
            overall_avg_move_time_ms: 0.0,
        }
    }

    pub fn report(&self) -> String {
        format!(
            "[{}] games={} player1_wins={} player2_wins={} unfinished={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.started_at.format("%Y-%m-%d %H:%M:%S"),
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.unfinished,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match from the opening.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> AmazonsResult<MatchResult> {
    let (board, opening_moves) = apply_seeded_random_opening(
        &Board::new(),
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    );
    play_engine_match_from_board(engine_white, engine_black, board, opening_moves, config)
}

/// Play a match from a caller-provided position without a random opening.
pub fn play_engine_match_from(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    start: Board,
    config: &MatchConfig,
) -> AmazonsResult<MatchResult> {
    play_engine_match_from_board(engine_white, engine_black, start, Vec::new(), config)
}

fn play_engine_match_from_board(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    mut board: Board,
    opening_moves: Vec<Move>,
    config: &MatchConfig,
) -> AmazonsResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut result = MatchResult {
        outcome: MatchOutcome::Unfinished,
        final_board: Board::empty(),
        opening_moves,
        played_moves: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if let Some(winner) = board.winner() {
            result.outcome = MatchOutcome::Win(winner);
            break;
        }

        let mover = board.turn();
        let started = Instant::now();
        let (mv, _) = match mover {
            Side::White => play_engine_move(engine_white, &mut board, &config.go_params)?,
            Side::Black => play_engine_move(engine_black, &mut board, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Side::White => {
                result.white_move_count = result.white_move_count.saturating_add(1);
                result.white_total_time_ns = result.white_total_time_ns.saturating_add(elapsed_ns);
            }
            Side::Black => {
                result.black_move_count = result.black_move_count.saturating_add(1);
                result.black_total_time_ns = result.black_total_time_ns.saturating_add(elapsed_ns);
            }
        }
        result.played_moves.push(mv);
    }

    // The last ply may have ended the game.
    if let Some(winner) = board.winner() {
        result.outcome = MatchOutcome::Win(winner);
    }

    result.final_board = board;
    Ok(result)
}

/// Play a series of matches and aggregate win statistics.
///
/// Player sides are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> AmazonsResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats::new(config.games);
    let mut side_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = side_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        info!(
            game = i + 1,
            games = config.games,
            seed,
            white = if player1_is_white { player1.name() } else { player2.name() },
            black = if player1_is_white { player2.name() } else { player1.name() },
            "starting series game"
        );

        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.black_move_count,
                result.white_total_time_ns,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.white_move_count,
                result.black_total_time_ns,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome {
            MatchOutcome::Win(side) => {
                let player = if (side == Side::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, side }
            }
            MatchOutcome::Unfinished => {
                stats.unfinished += 1;
                SeriesOutcome::Unfinished
            }
        };
        stats.outcomes.push(mapped);

        info!(
            game = i + 1,
            result = ?mapped,
            plies = result.final_board.num_moves(),
            p1_wins = stats.player1_wins,
            p2_wins = stats.player2_wins,
            "series game finished"
        );
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

/// Play a seeded number of uniformly random legal plies.
///
/// Stops early if a side runs out of moves.
pub fn apply_seeded_random_opening(
    initial: &Board,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> (Board, Vec<Move>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = initial.clone();
    let mut opening_moves = Vec::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let legal_moves: Vec<Move> = board.legal_moves().collect();
        if legal_moves.is_empty() {
            break;
        }

        let chosen = legal_moves[rng.random_range(0..legal_moves.len())];
        board.apply_unchecked(chosen);
        opening_moves.push(chosen);
    }

    (board, opening_moves)
}
