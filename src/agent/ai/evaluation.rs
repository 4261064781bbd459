// Position evaluation for depth-exhausted, non-terminal leaves
// Returns a score from the perspective of the evaluated player (positive = good)

use crate::game_repr::{BoardGeometry, BoardState, Coord, PlayerId, TreeState};

// Mobility weighting
const OPPONENT_MOBILITY_WEIGHT: i32 = 4;
const ENDGAME_MOBILITY_MULTIPLIER: i32 = 2;

// Phase boundaries in plies (lower edge inclusive)
const MIDGAME_START_PLY: u32 = 30;
const ENDGAME_START_PLY: u32 = 50;

// Reference point for the centrality feature
const CENTER: Coord = Coord::new(5, 4);

/// Scores a state for one player when the search runs out of depth.
pub trait Heuristic<S> {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64;
}

impl<S, H: Heuristic<S> + ?Sized> Heuristic<S> for &H {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        (**self).evaluate(state, player)
    }
}

/// Tunable weights and thresholds of the positional evaluators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalWeights {
    /// Multiplier on the opponent's liberty count.
    pub opponent_mobility_weight: i32,
    /// Multiplier on the whole mobility score in the endgame.
    pub endgame_mobility_multiplier: i32,
    /// First ply of the midgame.
    pub midgame_start_ply: u32,
    /// First ply of the endgame.
    pub endgame_start_ply: u32,
    pub center: Coord,
    pub geometry: BoardGeometry,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            opponent_mobility_weight: OPPONENT_MOBILITY_WEIGHT,
            endgame_mobility_multiplier: ENDGAME_MOBILITY_MULTIPLIER,
            midgame_start_ply: MIDGAME_START_PLY,
            endgame_start_ply: ENDGAME_START_PLY,
            center: CENTER,
            geometry: BoardGeometry::default(),
        }
    }
}

/// Game phase selected by ply count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Opening,
    Midgame,
    Endgame,
}

impl GamePhase {
    pub fn from_ply(ply: u32, weights: &EvalWeights) -> Self {
        if ply < weights.midgame_start_ply {
            GamePhase::Opening
        } else if ply < weights.endgame_start_ply {
            GamePhase::Midgame
        } else {
            GamePhase::Endgame
        }
    }
}

/// Own liberties minus weighted opponent liberties
pub fn mobility_score<S: BoardState>(state: &S, player: PlayerId, weights: &EvalWeights) -> i32 {
    let own = state.liberties(state.location_of(player)).len() as i32;
    let opp = state.liberties(state.location_of(player.opponent())).len() as i32;
    own - weights.opponent_mobility_weight * opp
}

/// Manhattan distance between the two tokens
pub fn player_distance<S: BoardState>(state: &S, player: PlayerId, weights: &EvalWeights) -> i32 {
    weights.geometry.distance(
        state.location_of(player),
        state.location_of(player.opponent()),
    )
}

/// Manhattan distance from the player's token to the center reference
pub fn center_distance<S: BoardState>(state: &S, player: PlayerId, weights: &EvalWeights) -> i32 {
    weights
        .geometry
        .decode(state.location_of(player))
        .manhattan(weights.center)
}

/// Phase-dependent linear combination of mobility, distance and centrality.
///
/// - Opening: chase the opponent (`mobility - distance`)
/// - Midgame: keep engaging while drifting off-center (`-distance + mobility + center`)
/// - Endgame: mobility counts double, keep away from the opponent and near the
///   center (`distance + 2*mobility - center`)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhasedHeuristic {
    pub weights: EvalWeights,
}

impl PhasedHeuristic {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    pub fn phase<S: BoardState>(&self, state: &S) -> GamePhase {
        GamePhase::from_ply(state.ply_count(), &self.weights)
    }
}

impl<S: BoardState> Heuristic<S> for PhasedHeuristic {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        let w = &self.weights;
        let mobility = mobility_score(state, player, w);
        let distance = player_distance(state, player, w);

        let score = match self.phase(state) {
            GamePhase::Opening => mobility - distance,
            GamePhase::Midgame => -distance + mobility + center_distance(state, player, w),
            GamePhase::Endgame => {
                distance + w.endgame_mobility_multiplier * mobility
                    - center_distance(state, player, w)
            }
        };
        score as f64
    }
}

/// Mobility differential alone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MobilityHeuristic {
    pub weights: EvalWeights,
}

impl<S: BoardState> Heuristic<S> for MobilityHeuristic {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        mobility_score(state, player, &self.weights) as f64
    }
}

/// Number of cells the player can move to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OwnMovesHeuristic;

impl<S: BoardState> Heuristic<S> for OwnMovesHeuristic {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        state.liberties(state.location_of(player)).len() as f64
    }
}

/// Static node value of an explicit [`TreeState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeValue;

impl<'a> Heuristic<TreeState<'a>> for NodeValue {
    fn evaluate(&self, state: &TreeState<'a>, player: PlayerId) -> f64 {
        state.value_for(player)
    }
}
