//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::{FrameId, PageId};
use crate::engine::frame_bank::FrameBank;
use crate::engine::policy::VictimSelector;

/// FIFO victim selection.
///
/// Keeps a queue of slot indices in load order. Every load appends the slot
/// to the tail; eviction pops the head - the slot that has held its current
/// page the longest. Hits never reorder the queue (no recency promotion).
pub struct FifoSelector {
    /// Occupied slots in load/replace order (front = oldest).
    order: VecDeque<FrameId>,
}

impl FifoSelector {
    /// Create a new FIFO selector with an empty queue.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }
}

impl Default for FifoSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl VictimSelector for FifoSelector {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn record_hit(&mut self, _slot: FrameId, _page: PageId, _position: usize) {
        // Hits do not touch the queue.
    }

    fn record_load(&mut self, slot: FrameId, _page: PageId, _position: usize) {
        self.order.push_back(slot);
    }

    fn select_victim(&mut self, _bank: &FrameBank, _future: &[PageId]) -> FrameId {
        // One queue entry per occupied slot, so a full bank means a
        // non-empty queue.
        self.order.pop_front().unwrap_or(FrameId::new(0))
    }
}
