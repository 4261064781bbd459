pub mod player;
pub use player::*;

pub mod publisher;
pub use publisher::*;

pub mod ai;
pub use ai::{AlphaBetaPlayer, HeuristicKind, SearchConfig, SearchResult};
