//! Agent trait for entities that choose actions in a turn-based game.
//!
//! An agent is asked for an action once per turn. Instead of returning a
//! single answer it publishes candidate actions to an [`ActionSink`], as many
//! times as it likes; the last one written before the caller's deadline is
//! the move that gets played.
//!
//! # Blocking Behavior
//!
//! `get_action()` runs synchronously on the caller's thread and does not watch
//! the clock. A search-based agent may keep deepening long after the answer
//! stopped mattering, so the caller typically runs it on a worker thread with
//! a channel sink and reads the latest action when its time budget expires:
//!
//! ```rust,no_run
//! use isolation_agent::agent::{Agent, AlphaBetaPlayer};
//! use isolation_agent::game_repr::{GameTree, PlayerId};
//! use std::time::{Duration, Instant};
//!
//! let (mut tx, rx) = crossbeam_channel::unbounded::<usize>();
//! let deadline = Instant::now() + Duration::from_millis(150);
//!
//! std::thread::spawn(move || {
//!     let tree = GameTree::uniform(2, &[3.0, 5.0, 2.0, 9.0]);
//!     let mut agent = AlphaBetaPlayer::for_trees(PlayerId::FIRST);
//!     agent.get_action(&tree.root_at_ply(2), &mut tx);
//! });
//!
//! let mut chosen = None;
//! while let Ok(action) = rx.recv_deadline(deadline) {
//!     chosen = Some(action);
//! }
//! println!("playing {:?}", chosen);
//! ```
//!
//! Dropping the receiver tells the agent nobody is listening any more.

use crate::agent::publisher::ActionSink;
use crate::game_repr::{GameState, PlayerId};

/// Trait for entities that can provide actions for one side of a game.
pub trait Agent<S: GameState> {
    /// Publish at least one legal action for `state` to `sink`.
    ///
    /// Returns once the agent has nothing more to say or the sink reports
    /// that the reader is gone.
    fn get_action(&mut self, state: &S, sink: &mut dyn ActionSink<S::Action>);

    /// Side this agent plays.
    fn player_id(&self) -> PlayerId;

    /// Display name, used in logs.
    fn name(&self) -> &str {
        "Agent"
    }
}
