// Minimax Search with Alpha-Beta Pruning
//
// Two mutually recursive functions, max_value and min_value, alternate between
// the searching player (maximizing) and the opponent (minimizing). All scores
// are from the searching player's perspective: heuristic values at
// depth-exhausted leaves, utilities at terminal states.
//
// Depth is checked before the terminal test, so a terminal state reached with
// no depth left is scored by the heuristic. Depth drops by one per ply with no
// extensions or quiescence.
//
// Cutoffs return the running value as soon as it crosses the opposite bound
// (v <= alpha in min nodes, v >= beta in max nodes).
//
// The root does not keep a separate alpha: the best score found so far is
// passed down as alpha, narrowing the window as better moves turn up.

use crate::game_repr::{GameState, PlayerId};
use super::evaluation::Heuristic;
use std::time::Instant;

/// Work counters for one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered below the root
    pub nodes: u64,
    /// Heuristic or utility evaluations
    pub leaf_evaluations: u64,
}

impl SearchStats {
    pub fn add(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.leaf_evaluations += other.leaf_evaluations;
    }
}

/// Fixed-depth alpha-beta searcher for one player.
///
/// Owns nothing but counters; every (state, alpha, beta, depth) frame lives on
/// the call stack. Recursion depth is bounded by the requested depth.
pub struct AlphaBeta<'h, H> {
    heuristic: &'h H,
    player: PlayerId,
    deadline: Option<Instant>,
    interrupted: bool,
    stats: SearchStats,
}

impl<'h, H> AlphaBeta<'h, H> {
    pub fn new(heuristic: &'h H, player: PlayerId) -> Self {
        Self {
            heuristic,
            player,
            deadline: None,
            interrupted: false,
            stats: SearchStats::default(),
        }
    }

    /// Stop the root loop once `deadline` has passed.
    ///
    /// Only checked between root actions, never inside the recursion.
    pub fn with_deadline(mut self, deadline: Option<Instant>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Whether the last root search was abandoned at the deadline.
    pub fn interrupted(&self) -> bool {
        self.interrupted
    }

    fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

impl<'h, H> AlphaBeta<'h, H> {
    /// Search every root action to `depth` plies and return the best one with
    /// its score.
    ///
    /// Returns `None` when no action beats negative infinity, or when the
    /// deadline cut the root loop short (see [`interrupted`](Self::interrupted)).
    pub fn search_root<S>(&mut self, state: &S, depth: u32) -> Option<(S::Action, f64)>
    where
        S: GameState,
        H: Heuristic<S>,
    {
        self.interrupted = false;

        let beta = f64::INFINITY;
        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = None;

        for action in state.actions() {
            if self.deadline_passed() {
                self.interrupted = true;
                return None;
            }

            let child = state.result(&action);
            let v = self.min_value(&child, best_score, beta, depth.saturating_sub(1));
            if v > best_score {
                best_score = v;
                best_move = Some(action);
            }
        }

        best_move.map(|action| (action, best_score))
    }

    /// Value of `state` with the opponent to move.
    pub fn min_value<S>(&mut self, state: &S, alpha: f64, mut beta: f64, depth: u32) -> f64
    where
        S: GameState,
        H: Heuristic<S>,
    {
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.leaf_evaluations += 1;
            return self.heuristic.evaluate(state, self.player);
        }
        if state.terminal_test() {
            self.stats.leaf_evaluations += 1;
            return state.utility(self.player);
        }

        let mut v = f64::INFINITY;
        for action in state.actions() {
            let child = state.result(&action);
            v = v.min(self.max_value(&child, alpha, beta, depth - 1));
            if v <= alpha {
                return v;
            }
            beta = beta.min(v);
        }
        v
    }

    /// Value of `state` with the searching player to move.
    pub fn max_value<S>(&mut self, state: &S, mut alpha: f64, beta: f64, depth: u32) -> f64
    where
        S: GameState,
        H: Heuristic<S>,
    {
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.leaf_evaluations += 1;
            return self.heuristic.evaluate(state, self.player);
        }
        if state.terminal_test() {
            self.stats.leaf_evaluations += 1;
            return state.utility(self.player);
        }

        let mut v = f64::NEG_INFINITY;
        for action in state.actions() {
            let child = state.result(&action);
            v = v.max(self.min_value(&child, alpha, beta, depth - 1));
            if v >= beta {
                return v;
            }
            alpha = alpha.max(v);
        }
        v
    }
}

/// Fixed-depth alpha-beta search of `state` for `player`.
///
/// Convenience wrapper returning the best action, its score and the work done.
pub fn alpha_beta_root<S, H>(
    state: &S,
    depth: u32,
    player: PlayerId,
    heuristic: &H,
) -> (Option<(S::Action, f64)>, SearchStats)
where
    S: GameState,
    H: Heuristic<S>,
{
    let mut searcher = AlphaBeta::new(heuristic, player);
    let best = searcher.search_root(state, depth);
    (best, searcher.stats())
}
