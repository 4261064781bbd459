//! Anytime adversarial search for two-agent, zero-sum board games.
//!
//! [`game_repr`] holds the state contract the engine consumes; [`agent`]
//! holds the agents, the action publication channel and the search itself.

pub mod agent;
pub mod game_repr;
