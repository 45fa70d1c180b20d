//! Iterative-deepening mobility-search engine.
//!
//! Wraps the time-bounded alpha-beta search with the mobility scorer. Each
//! move gets a wall-clock budget (explicit `movetime`, clock-derived, or the
//! configured default) and an optional depth cap. The `TimeStrategy` option
//! picks how clock data turns into that budget.

use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::engines::time_management::{resolve_go_params, TimeManagementStrategy};
use crate::errors::{AmazonsError, AmazonsResult};
use crate::game_state::amazons_types::Board;
use crate::search::board_scoring::MobilityScorer;
use crate::search::iterative_deepening::{iterative_deepening_search, SearchConfig};

pub struct IterativeEngine {
    config: SearchConfig,
    scorer: MobilityScorer,
    strategy: TimeManagementStrategy,
}

impl IterativeEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            scorer: MobilityScorer,
            strategy: TimeManagementStrategy::Adaptive,
        }
    }

    pub fn with_movetime(movetime_ms: u64) -> Self {
        Self::new(SearchConfig {
            movetime_ms,
            ..SearchConfig::default()
        })
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn strategy(&self) -> TimeManagementStrategy {
        self.strategy
    }
}

impl Default for IterativeEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

fn invalid_option(name: &str, value: &str) -> AmazonsError {
    AmazonsError::InvalidOption {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}

impl Engine for IterativeEngine {
    fn name(&self) -> &str {
        "Amazons Iterative"
    }

    fn set_option(&mut self, name: &str, value: &str) -> AmazonsResult<()> {
        let trimmed = value.trim();
        if name.eq_ignore_ascii_case("MoveTime") {
            self.config.movetime_ms = trimmed
                .parse::<u64>()
                .map_err(|_| invalid_option(name, value))?;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("MaxDepth") {
            // 0 or "none" lifts the cap.
            self.config.max_depth = if trimmed.eq_ignore_ascii_case("none") {
                None
            } else {
                match trimmed.parse::<u8>().map_err(|_| invalid_option(name, value))? {
                    0 => None,
                    depth => Some(depth),
                }
            };
            return Ok(());
        }
        if name.eq_ignore_ascii_case("TimeStrategy") {
            self.strategy = if trimmed.eq_ignore_ascii_case("fraction20") {
                TimeManagementStrategy::Fraction20
            } else if trimmed.eq_ignore_ascii_case("adaptive") {
                TimeManagementStrategy::Adaptive
            } else {
                return Err(invalid_option(name, value));
            };
            return Ok(());
        }
        debug!(name, value, "ignoring unknown engine option");
        Ok(())
    }

    fn choose_move(&mut self, board: &Board, params: &GoParams) -> AmazonsResult<EngineOutput> {
        let resolved = resolve_go_params(board, params, self.strategy);
        let config = SearchConfig {
            max_depth: params.depth.or(self.config.max_depth),
            movetime_ms: resolved.movetime_ms.unwrap_or(self.config.movetime_ms),
        };

        let result = iterative_deepening_search(board, &self.scorer, config)?;

        let mut out = EngineOutput {
            best_move: result.best_move,
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} time {}",
            result.reached_depth, result.best_score, result.nodes, result.elapsed_ms
        ));
        if result.search_exhausted {
            out.info_lines.push("info string search exhausted".to_owned());
        }
        if result.time_expired {
            out.info_lines.push(format!(
                "info string time expired after {} ms budget",
                config.movetime_ms
            ));
        }

        info!(
            side = %board.turn(),
            depth = result.reached_depth,
            score = result.best_score,
            nodes = result.nodes,
            budget_ms = config.movetime_ms,
            best = ?result.best_move,
            "iterative engine chose move"
        );
        Ok(out)
    }
}
