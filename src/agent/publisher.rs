//! Action publication channel between the search and its caller.
//!
//! A search publishes a candidate action every time it finishes a depth.
//! Later publications replace earlier ones: only the last value written before
//! the caller stops listening is binding. The publisher does no time-keeping
//! of its own.
//!
//! Any last-write-wins register works as a sink:
//! - [`LatestAction`] keeps only the newest value behind a mutex
//! - `crossbeam_channel::Sender` / `std::sync::mpsc::Sender` stream every
//!   value and the reader keeps the last one it saw
//! - `Vec` records the whole sequence, which is what tests want

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PublishError {
    /// The reading side is gone; nobody will observe further actions.
    #[error("action receiver disconnected")]
    Disconnected,
}

/// Write-only channel accepting candidate actions.
pub trait ActionSink<A> {
    fn publish(&mut self, action: A) -> Result<(), PublishError>;
}

impl<A> ActionSink<A> for Vec<A> {
    fn publish(&mut self, action: A) -> Result<(), PublishError> {
        self.push(action);
        Ok(())
    }
}

impl<A> ActionSink<A> for crossbeam_channel::Sender<A> {
    fn publish(&mut self, action: A) -> Result<(), PublishError> {
        self.send(action).map_err(|_| PublishError::Disconnected)
    }
}

impl<A> ActionSink<A> for std::sync::mpsc::Sender<A> {
    fn publish(&mut self, action: A) -> Result<(), PublishError> {
        self.send(action).map_err(|_| PublishError::Disconnected)
    }
}

/// Shared last-write-wins slot.
///
/// Clones share the same slot, so the caller keeps one handle and hands
/// another to the searching thread.
#[derive(Debug)]
pub struct LatestAction<A> {
    slot: Arc<Mutex<Option<A>>>,
    published: Arc<AtomicU64>,
}

impl<A> Clone for LatestAction<A> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
            published: Arc::clone(&self.published),
        }
    }
}

impl<A> Default for LatestAction<A> {
    fn default() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            published: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl<A: Clone> LatestAction<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently published action, if any.
    pub fn latest(&self) -> Option<A> {
        self.slot.lock().clone()
    }

    /// Take the binding action, leaving the slot empty.
    pub fn take(&self) -> Option<A> {
        self.slot.lock().take()
    }

    /// Number of publications so far.
    pub fn publish_count(&self) -> u64 {
        self.published.load(Ordering::Acquire)
    }
}

impl<A> ActionSink<A> for LatestAction<A> {
    fn publish(&mut self, action: A) -> Result<(), PublishError> {
        *self.slot.lock() = Some(action);
        self.published.fetch_add(1, Ordering::Release);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_records_sequence() {
        let mut sink: Vec<u32> = Vec::new();
        sink.publish(1).unwrap();
        sink.publish(2).unwrap();
        assert_eq!(sink, vec![1, 2]);
    }

    #[test]
    fn test_latest_action_overwrites() {
        let latest = LatestAction::new();
        let mut writer = latest.clone();

        assert_eq!(latest.latest(), None);
        writer.publish("a").unwrap();
        writer.publish("b").unwrap();

        assert_eq!(latest.latest(), Some("b"));
        assert_eq!(latest.publish_count(), 2);
        assert_eq!(latest.take(), Some("b"));
        assert_eq!(latest.latest(), None);
    }

    #[test]
    fn test_crossbeam_sender_disconnect() {
        let (mut tx, rx) = crossbeam_channel::unbounded();
        tx.publish(5u8).unwrap();
        assert_eq!(rx.recv(), Ok(5));

        drop(rx);
        assert_eq!(tx.publish(6), Err(PublishError::Disconnected));
    }

    #[test]
    fn test_mpsc_sender_disconnect() {
        let (mut tx, rx) = std::sync::mpsc::channel();
        tx.publish(1i32).unwrap();
        drop(rx);
        assert_eq!(tx.publish(2), Err(PublishError::Disconnected));
    }
}
