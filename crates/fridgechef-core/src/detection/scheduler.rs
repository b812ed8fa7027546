//! One-shot detection timers.
//!
//! Scheduling never cancels earlier timers: two quick scans leave two
//! pending timers and both fire. `cancel` exists for callers that need it,
//! the screen controller does not use it.

use serde::{Deserialize, Serialize};

/// Identifies one scheduled detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectionHandle(u64);

impl DetectionHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PendingDetection {
    handle: DetectionHandle,
    due_at_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionScheduler {
    next_id: u64,
    pending: Vec<PendingDetection>,
}

impl DetectionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a timer that becomes due `delay_ms` after `now_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) -> DetectionHandle {
        self.next_id += 1;
        let handle = DetectionHandle(self.next_id);
        self.pending.push(PendingDetection {
            handle,
            due_at_ms: now_ms.saturating_add(delay_ms),
        });
        handle
    }

    /// Drop a pending timer. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, handle: DetectionHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    /// Remove and return every timer due at `now_ms`, earliest first.
    ///
    /// Timers with the same deadline come out in scheduling order.
    pub fn poll_due(&mut self, now_ms: u64) -> Vec<DetectionHandle> {
        let (mut due, waiting): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|p| p.due_at_ms <= now_ms);
        self.pending = waiting;
        due.sort_by_key(|p| (p.due_at_ms, p.handle));
        due.into_iter().map(|p| p.handle).collect()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.due_at_ms).min()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
