//! Self-play driver: two searching engines play one game from the opening,
//! printing each move and the final position.
//!
//! Run with:
//! `cargo run --release`
//! `AMAZONS_MOVETIME_MS=300 cargo run --release -- --verbose`

use amazons::engines::engine_iterative::IterativeEngine;
use amazons::engines::engine_trait::{play_engine_move, Engine, GoParams};
use amazons::errors::AmazonsResult;
use amazons::game_state::amazons_types::{Board, Side};
use amazons::search::iterative_deepening::DEFAULT_MOVETIME_MS;
use amazons::utils::algebraic::format_game_record;
use amazons::utils::render_game_state::render_board;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn movetime_from_env() -> u64 {
    match std::env::var("AMAZONS_MOVETIME_MS") {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(%value, "ignoring unparsable AMAZONS_MOVETIME_MS");
            DEFAULT_MOVETIME_MS
        }),
        Err(_) => DEFAULT_MOVETIME_MS,
    }
}

fn main() -> AmazonsResult<()> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let movetime_ms = movetime_from_env();
    let mut white = IterativeEngine::with_movetime(movetime_ms);
    let mut black = IterativeEngine::with_movetime(movetime_ms);
    let params = GoParams::default();
    let mut board = Board::new();

    info!(movetime_ms, "starting self-play game");
    println!("{}\n", render_board(&board));

    while board.winner().is_none() {
        let engine: &mut dyn Engine = match board.turn() {
            Side::White => &mut white,
            Side::Black => &mut black,
        };
        let mover = board.turn();
        let (_, text) = play_engine_move(engine, &mut board, &params)?;
        println!("{:>3}. {mover}: {text}", board.num_moves());
        if verbose {
            println!("{}\n", render_board(&board));
        }
    }

    println!("\n{}\n", render_board(&board));
    if let Some(winner) = board.winner() {
        println!("{winner} wins after {} moves", board.num_moves());
        info!(%winner, moves = board.num_moves(), "game over");
    }
    print!("{}", format_game_record(board.history()));
    Ok(())
}
