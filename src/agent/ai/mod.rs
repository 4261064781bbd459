// AI Agent - Iterative Deepening Alpha-Beta Search
//
// Anytime adversarial search for two-agent, zero-sum, perfect-information
// games on a discrete board.
//
// Key features:
// - Minimax with alpha-beta pruning (separate max/min functions)
// - Iterative deepening that publishes a move after every completed depth
// - Phase-dependent positional heuristic at depth-exhausted leaves
// - Random choice for the opening plies
// - No internal clock unless a time limit is configured; the caller decides
//   when to stop listening

mod alpha_beta;
mod alpha_beta_player;
mod evaluation;
mod heuristic_kind;
mod search;


pub use alpha_beta::{alpha_beta_root, AlphaBeta, SearchStats};
pub use alpha_beta_player::AlphaBetaPlayer;
pub use evaluation::{
    center_distance, mobility_score, player_distance, EvalWeights, GamePhase, Heuristic,
    MobilityHeuristic, NodeValue, OwnMovesHeuristic, PhasedHeuristic,
};
pub use heuristic_kind::{HeuristicKind, WeightedHeuristic};
pub use search::{
    iterative_deepening_search, SearchConfig, SearchResult, DEFAULT_MAX_DEPTH,
    DEFAULT_RANDOM_OPENING_PLIES,
};
