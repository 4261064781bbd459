//! AlphaBetaPlayer - anytime adversarial search agent
//!
//! Plays one side of a two-agent, zero-sum game by iterative-deepening
//! alpha-beta search over a [`GameState`], scoring depth-exhausted leaves with
//! a pluggable [`Heuristic`].
//!
//! # Turn Behavior
//!
//! - While the state's ply count is below `random_opening_plies` (2 by
//!   default) the player publishes one uniformly random legal action and
//!   returns. Symmetric openings are not worth the search time.
//! - Otherwise it deepens one ply at a time up to `max_depth` (100 by default)
//!   and publishes the best action after every completed depth.
//!
//! The player never times itself out unless `SearchConfig::time_limit` is set;
//! the caller is expected to stop reading once its deadline passes.
//!
//! # Examples
//!
//! ```ignore
//! use isolation_agent::agent::{AlphaBetaPlayer, LatestAction, Agent};
//! use isolation_agent::agent::ai::HeuristicKind;
//! use isolation_agent::game_repr::PlayerId;
//!
//! // board is any BoardState implementation (setup omitted)
//! let mut ai = AlphaBetaPlayer::new(PlayerId::SECOND, HeuristicKind::Phased);
//! let latest = LatestAction::new();
//! ai.get_action(&board, &mut latest.clone());
//! let action = latest.latest();
//! ```

use crate::agent::player::Agent;
use crate::agent::publisher::ActionSink;
use crate::game_repr::{GameState, PlayerId};
use super::evaluation::{Heuristic, NodeValue};
use super::search::{iterative_deepening_search, SearchConfig};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Agent running iterative-deepening alpha-beta search
pub struct AlphaBetaPlayer<H> {
    /// Side this player searches for
    player_id: PlayerId,

    /// Depth ceiling, opening length and optional time limit
    config: SearchConfig,

    /// Leaf evaluator
    heuristic: H,

    /// Source of opening randomness
    rng: StdRng,

    name: String,
}

impl<H> AlphaBetaPlayer<H> {
    /// Create a player with default search settings and an entropy-seeded RNG
    pub fn new(player_id: PlayerId, heuristic: H) -> Self {
        Self {
            player_id,
            config: SearchConfig::default(),
            heuristic,
            rng: StdRng::from_entropy(),
            name: format!("AlphaBeta (P{})", player_id.index() + 1),
        }
    }

    /// Replace the search configuration
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the opening RNG for reproducible games
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl AlphaBetaPlayer<NodeValue> {
    /// Player for explicit game trees, scoring cutoffs by node value
    pub fn for_trees(player_id: PlayerId) -> Self {
        Self::new(player_id, NodeValue)
    }
}

impl<S, H> Agent<S> for AlphaBetaPlayer<H>
where
    S: GameState,
    H: Heuristic<S>,
{
    fn get_action(&mut self, state: &S, sink: &mut dyn ActionSink<S::Action>) {
        if state.ply_count() < self.config.random_opening_plies {
            let actions = state.actions();
            let Some(action) = actions.choose(&mut self.rng) else {
                debug!("[{}] no legal actions at ply {}", self.name, state.ply_count());
                return;
            };
            trace!("[{}] random opening action {:?}", self.name, action);
            if sink.publish(action.clone()).is_err() {
                debug!("[{}] action receiver gone before opening move", self.name);
            }
            return;
        }

        let result = iterative_deepening_search(state, self.player_id, &self.heuristic, &self.config, sink);
        debug!(
            "[{}] finished at depth {} after {}ms ({} nodes), published {} actions",
            self.name, result.depth, result.time_ms, result.nodes_searched, result.published
        );
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
