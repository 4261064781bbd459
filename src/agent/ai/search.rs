// Iterative Deepening Search Orchestrator
//
// Runs a fixed-depth alpha-beta search at depth 1, 2, 3, ... up to max_depth
// and publishes the best action after every completed depth, so a usable
// answer exists as soon as depth 1 finishes. The caller owns the wall clock:
// it stops listening (or stops the thread) whenever its deadline fires. An
// optional self-imposed time limit is checked only at the root.

use crate::agent::publisher::ActionSink;
use crate::game_repr::{GameState, PlayerId};
use super::alpha_beta::{AlphaBeta, SearchStats};
use super::evaluation::Heuristic;
use log::debug;
use std::time::{Duration, Instant};

/// Depth ceiling; real games end long before it.
pub const DEFAULT_MAX_DEPTH: u32 = 100;

/// Plies played by uniform random choice before searching.
pub const DEFAULT_RANDOM_OPENING_PLIES: u32 = 2;

/// Search parameters for one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Deepest iteration to attempt
    pub max_depth: u32,
    /// States with a ply count below this get a random action without search
    pub random_opening_plies: u32,
    /// Optional self-imposed budget (None = run until the caller stops us)
    pub time_limit: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            random_opening_plies: DEFAULT_RANDOM_OPENING_PLIES,
            time_limit: None,
        }
    }
}

impl SearchConfig {
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_random_opening_plies(mut self, plies: u32) -> Self {
        self.random_opening_plies = plies;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// Best action at the deepest completed depth that produced one
    pub best_move: Option<A>,
    pub score: f64,
    /// Depth `best_move` and `score` come from (0 = none)
    pub depth: u32,
    /// Number of actions handed to the sink
    pub published: u32,
    pub nodes_searched: u64,
    pub leaf_evaluations: u64,
    pub time_ms: u64,
}

impl<A> SearchResult<A> {
    /// Create a new search result with no move found
    pub fn new() -> Self {
        Self {
            best_move: None,
            score: f64::NEG_INFINITY,
            depth: 0,
            published: 0,
            nodes_searched: 0,
            leaf_evaluations: 0,
            time_ms: 0,
        }
    }
}

impl<A> Default for SearchResult<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform iterative deepening search, publishing after every completed depth
///
/// # Arguments
/// * `state` - Position to search
/// * `player` - Player the scores are computed for
/// * `heuristic` - Leaf evaluator for depth-exhausted states
/// * `config` - Depth ceiling and optional time limit
/// * `sink` - Receives the best action of every completed depth
///
/// # Returns
/// SearchResult describing the deepest completed depth that produced a move
///
/// The time limit never applies to depth 1, so a state with a legal action
/// always gets at least one publication.
pub fn iterative_deepening_search<S, H, K>(
    state: &S,
    player: PlayerId,
    heuristic: &H,
    config: &SearchConfig,
    sink: &mut K,
) -> SearchResult<S::Action>
where
    S: GameState,
    H: Heuristic<S>,
    K: ActionSink<S::Action> + ?Sized,
{
    let start_time = Instant::now();
    let deadline = config.time_limit.map(|limit| start_time + limit);
    let mut best_result = SearchResult::new();
    let mut total = SearchStats::default();

    for depth in 1..=config.max_depth {
        let depth_deadline = if depth > 1 { deadline } else { None };
        let mut searcher = AlphaBeta::new(heuristic, player).with_deadline(depth_deadline);
        let best = searcher.search_root(state, depth);
        total.add(searcher.stats());

        if searcher.interrupted() {
            debug!("time limit reached during depth {}, keeping depth {}", depth, best_result.depth);
            break;
        }

        best_result.nodes_searched = total.nodes;
        best_result.leaf_evaluations = total.leaf_evaluations;
        best_result.time_ms = start_time.elapsed().as_millis() as u64;

        let Some((action, score)) = best else {
            debug!("depth {} found no move above -inf", depth);
            continue;
        };

        best_result.depth = depth;
        best_result.best_move = Some(action.clone());
        best_result.score = score;
        log_search_info(depth, &best_result);

        if sink.publish(action).is_err() {
            debug!("action receiver gone after depth {}, stopping search", depth);
            break;
        }
        best_result.published += 1;
    }

    best_result.time_ms = start_time.elapsed().as_millis() as u64;
    best_result
}

/// Log search information for a completed depth
fn log_search_info<A: std::fmt::Debug>(depth: u32, result: &SearchResult<A>) {
    debug!(
        "depth {} score {} nodes {} leaves {} time {}ms best {:?}",
        depth,
        result.score,
        result.nodes_searched,
        result.leaf_evaluations,
        result.time_ms,
        result.best_move
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::evaluation::NodeValue;
    use crate::agent::publisher::LatestAction;
    use crate::game_repr::GameTree;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, 100);
        assert_eq!(config.random_opening_plies, 2);
        assert_eq!(config.time_limit, None);
    }

    #[test]
    fn test_publishes_once_per_depth() {
        let tree = GameTree::uniform(2, &[3.0, 5.0, 2.0, 9.0]);
        let config = SearchConfig::default().with_max_depth(4);
        let mut sink = Vec::new();

        let result = iterative_deepening_search(&tree.root(), PlayerId::FIRST, &NodeValue, &config, &mut sink);

        assert_eq!(sink.len(), 4);
        assert_eq!(result.depth, 4);
        assert_eq!(result.published, 4);
        assert_eq!(result.best_move, sink.last().copied());
    }

    #[test]
    fn test_final_publication_matches_deepest_search() {
        // Interior values mislead depth 1; the leaves flip the choice at depth 2
        let mut tree = GameTree::new(0.0);
        let left = tree.add_child(GameTree::ROOT, 10.0);
        let right = tree.add_child(GameTree::ROOT, -10.0);
        tree.add_child(left, -5.0);
        tree.add_child(left, 8.0);
        tree.add_child(right, 1.0);
        tree.add_child(right, 2.0);

        let config = SearchConfig::default().with_max_depth(2);
        let mut sink = Vec::new();
        let result = iterative_deepening_search(&tree.root(), PlayerId::FIRST, &NodeValue, &config, &mut sink);

        assert_eq!(sink, vec![0, 1]);
        assert_eq!(result.best_move, Some(1));
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_zero_time_limit_still_publishes_depth_one() {
        let tree = GameTree::uniform(2, &[3.0, 5.0, 2.0, 9.0]);
        let config = SearchConfig::default().with_time_limit(Some(Duration::ZERO));
        let mut sink = Vec::new();

        let result = iterative_deepening_search(&tree.root_at_ply(2), PlayerId::FIRST, &NodeValue, &config, &mut sink);

        assert_eq!(sink.len(), 1);
        assert_eq!(result.depth, 1);
        assert_eq!(result.published, 1);
        assert_eq!(result.best_move, sink.last().copied());
    }

    #[test]
    fn test_depth_without_move_keeps_earlier_result() {
        // Interior nodes look fine at depth 1, every line below loses
        let mut tree = GameTree::new(0.0);
        for _ in 0..2 {
            let child = tree.add_child(GameTree::ROOT, 1.0);
            tree.add_child(child, f64::NEG_INFINITY);
        }

        let config = SearchConfig::default().with_max_depth(3);
        let mut sink = Vec::new();
        let result = iterative_deepening_search(&tree.root_at_ply(2), PlayerId::FIRST, &NodeValue, &config, &mut sink);

        assert_eq!(sink, vec![0]);
        assert_eq!(result.depth, 1);
        assert_eq!(result.best_move, Some(0));
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_stops_when_receiver_disconnects() {
        let tree = GameTree::uniform(2, &[1.0, 2.0]);
        let (mut tx, rx) = crossbeam_channel::unbounded();
        drop(rx);

        let config = SearchConfig::default();
        let result = iterative_deepening_search(&tree.root(), PlayerId::FIRST, &NodeValue, &config, &mut tx);

        assert_eq!(result.depth, 1);
        assert_eq!(result.published, 0);
    }

    #[test]
    fn test_latest_action_holds_last_depth() {
        let tree = GameTree::uniform(2, &[3.0, 5.0, 2.0, 9.0]);
        let config = SearchConfig::default().with_max_depth(3);
        let latest = LatestAction::new();
        let mut writer = latest.clone();

        iterative_deepening_search(&tree.root(), PlayerId::FIRST, &NodeValue, &config, &mut writer);

        assert_eq!(latest.publish_count(), 3);
        assert_eq!(latest.latest(), Some(0));
    }
}
