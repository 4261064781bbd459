//! Heuristic registry - enumerates the available leaf evaluators
//!
//! Lets callers pick an evaluator by value (e.g. from a config or a tournament
//! roster) without naming concrete types. Every kind evaluates any
//! [`BoardState`] by dispatching to the matching evaluator.

use super::evaluation::{
    EvalWeights, Heuristic, MobilityHeuristic, OwnMovesHeuristic, PhasedHeuristic,
};
use crate::game_repr::{BoardState, PlayerId};

/// Enumeration of available leaf evaluators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeuristicKind {
    /// Phase-dependent combination of mobility, distance and centrality
    #[default]
    Phased,
    /// Own liberties minus weighted opponent liberties
    Mobility,
    /// Own liberties only
    OwnMoves,
}

impl HeuristicKind {
    /// Get all available kinds
    pub fn all() -> &'static [HeuristicKind] {
        &[
            HeuristicKind::Phased,
            HeuristicKind::Mobility,
            HeuristicKind::OwnMoves,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HeuristicKind::Phased => "Phased",
            HeuristicKind::Mobility => "Mobility",
            HeuristicKind::OwnMoves => "Own moves",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HeuristicKind::Phased => "Chase early, hold the center midgame, double mobility late",
            HeuristicKind::Mobility => "Own liberties minus four times the opponent's",
            HeuristicKind::OwnMoves => "Count of own liberties",
        }
    }

    /// Bind this kind to a set of weights
    pub fn with_weights(self, weights: EvalWeights) -> WeightedHeuristic {
        WeightedHeuristic { kind: self, weights }
    }
}

impl<S: BoardState> Heuristic<S> for HeuristicKind {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        self.with_weights(EvalWeights::default())
            .evaluate(state, player)
    }
}

/// A heuristic kind together with the weights it evaluates with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedHeuristic {
    pub kind: HeuristicKind,
    pub weights: EvalWeights,
}

impl<S: BoardState> Heuristic<S> for WeightedHeuristic {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        match self.kind {
            HeuristicKind::Phased => PhasedHeuristic::new(self.weights).evaluate(state, player),
            HeuristicKind::Mobility => MobilityHeuristic {
                weights: self.weights,
            }
            .evaluate(state, player),
            HeuristicKind::OwnMoves => OwnMovesHeuristic.evaluate(state, player),
        }
    }
}
