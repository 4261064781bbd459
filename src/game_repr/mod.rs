mod location;
mod tree;

pub use location::*;
pub use tree::*;

use smallvec::SmallVec;
use std::fmt::Debug;

/// Legal actions from one state. A knight never has more than eight.
pub type ActionList<A> = SmallVec<[A; 8]>;

/// Cells reachable in one step from a location.
pub type Liberties = SmallVec<[Location; 8]>;

/// Identity of one of the two agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    /// Build from a raw index, `None` for anything other than 0 or 1.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::FIRST),
            1 => Some(Self::SECOND),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn opponent(&self) -> Self {
        PlayerId(1 - self.0)
    }
}

/// Immutable snapshot of a two-agent, zero-sum, perfect-information game.
///
/// The search trusts this contract completely:
/// - `actions` must be deterministic in order, since ordering decides ties
///   and which branches get pruned.
/// - A non-terminal state always has at least one action.
/// - `utility` is only meaningful when `terminal_test` holds.
/// - `result` of a legal action yields a state with `ply_count() + 1`.
pub trait GameState: Sized {
    type Action: Clone + Debug;

    fn actions(&self) -> ActionList<Self::Action>;

    fn result(&self, action: &Self::Action) -> Self;

    fn terminal_test(&self) -> bool;

    /// Terminal payoff for `player`.
    fn utility(&self, player: PlayerId) -> f64;

    fn ply_count(&self) -> u32;
}

/// A game state played by two tokens on a grid of encoded locations.
pub trait BoardState: GameState {
    fn location_of(&self, player: PlayerId) -> Location;

    fn liberties(&self, location: Location) -> Liberties;
}
