//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use amazons::engines::engine_iterative::IterativeEngine;
use amazons::engines::engine_random::RandomEngine;
use amazons::engines::engine_trait::Engine;
use amazons::errors::AmazonsResult;
use amazons::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> AmazonsResult<()> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let movetime_ms = std::env::var("AMAZONS_MOVETIME_MS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(200);

    // Customize these two lines to experiment with different engines and budgets.
    let player1 = move || Box::new(IterativeEngine::with_movetime(movetime_ms)) as Box<dyn Engine>;
    let player2 = || Box::new(RandomEngine::new()) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        &MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 100,
                opening_min_plies: 0,
                opening_max_plies: 4,
                ..MatchConfig::default()
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
