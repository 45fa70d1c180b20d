//! Crate root module declarations for the Amazons engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines and utility helpers) so binaries, benches and external
//! tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod amazons_types;
    pub mod board;
    pub mod square;
}

pub mod moves {
    pub mod amazon_move;
    pub mod queen_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod iterative_deepening;
}

pub mod engines {
    pub mod engine_iterative;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod time_management;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_text;
    pub mod engine_match_harness;
    pub mod render_game_state;
}
