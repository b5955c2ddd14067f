//! Deferred transition completions
//!
//! Each jump schedules exactly one completion carrying the transition token it
//! was issued under. The queue never decides whether a completion is stale;
//! the engine compares tokens when the completion fires.

use std::time::Duration;

/// A completion waiting for its due time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCompletion {
    /// Token captured when the jump was requested
    pub token: u64,
    /// Slide the jump targets
    pub target: usize,
    /// Simulated time at which the completion fires
    pub due: Duration,
}

/// FIFO of pending completions ordered by due time
#[derive(Debug, Default)]
pub struct CompletionQueue {
    pending: Vec<PendingCompletion>,
}

impl CompletionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a completion. Entries with equal due times keep call order.
    pub fn schedule(&mut self, completion: PendingCompletion) {
        let at = self
            .pending
            .iter()
            .position(|existing| existing.due > completion.due)
            .unwrap_or(self.pending.len());
        self.pending.insert(at, completion);
    }

    /// Remove and return every completion due at or before `now`, in order
    pub fn take_due(&mut self, now: Duration) -> Vec<PendingCompletion> {
        let split = self
            .pending
            .iter()
            .position(|completion| completion.due > now)
            .unwrap_or(self.pending.len());
        self.pending.drain(..split).collect()
    }

    /// Drop everything; returns how many completions were cancelled
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Next completion to fire, if any
    pub fn peek(&self) -> Option<&PendingCompletion> {
        self.pending.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion(token: u64, due_ms: u64) -> PendingCompletion {
        PendingCompletion {
            token,
            target: token as usize,
            due: Duration::from_millis(due_ms),
        }
    }

    #[test]
    fn test_take_due_in_order() {
        let mut queue = CompletionQueue::new();
        queue.schedule(completion(2, 700));
        queue.schedule(completion(1, 600));
        queue.schedule(completion(3, 700));

        let due = queue.take_due(Duration::from_millis(650));
        assert_eq!(due, vec![completion(1, 600)]);

        let due = queue.take_due(Duration::from_millis(700));
        assert_eq!(due, vec![completion(2, 700), completion(3, 700)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel_all() {
        let mut queue = CompletionQueue::new();
        queue.schedule(completion(1, 10));
        queue.schedule(completion(2, 20));
        assert_eq!(queue.cancel_all(), 2);
        assert!(queue.take_due(Duration::from_secs(1)).is_empty());
    }
}
