//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;

use crate::common::{FrameId, PageId};
use crate::engine::frame_bank::FrameBank;
use crate::engine::policy::VictimSelector;

/// LRU victim selection.
///
/// Tracks the reference-string position of each page's most recent access,
/// updated on both hits and loads. The victim is the occupied slot whose
/// page has the smallest last-access position, scanning slots in order so
/// ties go to the lowest slot index.
pub struct LruSelector {
    /// Most recent access position per page.
    last_access: HashMap<PageId, usize>,
}

impl LruSelector {
    /// Create a new LRU selector with no recorded accesses.
    pub fn new() -> Self {
        Self {
            last_access: HashMap::new(),
        }
    }
}

impl Default for LruSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl VictimSelector for LruSelector {
    fn name(&self) -> &'static str {
        "LRU"
    }

    fn record_hit(&mut self, _slot: FrameId, page: PageId, position: usize) {
        self.last_access.insert(page, position);
    }

    fn record_load(&mut self, _slot: FrameId, page: PageId, position: usize) {
        self.last_access.insert(page, position);
    }

    fn select_victim(&mut self, bank: &FrameBank, _future: &[PageId]) -> FrameId {
        let mut victim = FrameId::new(0);
        let mut oldest = usize::MAX;

        for (slot, page) in bank.occupied() {
            // Every resident page was recorded when it was loaded.
            let accessed = self.last_access.get(&page).copied().unwrap_or(0);
            if accessed < oldest {
                oldest = accessed;
                victim = slot;
            }
        }

        victim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_bank(pages: &[u32]) -> FrameBank {
        let mut bank = FrameBank::new(pages.len());
        for (i, &p) in pages.iter().enumerate() {
            bank.install(FrameId::new(i), PageId::new(p));
        }
        bank
    }

    #[test]
    fn test_lru_evicts_least_recently_used() {
        let mut selector = LruSelector::new();
        let bank = full_bank(&[7, 0, 1]);

        selector.record_load(FrameId::new(0), PageId::new(7), 0);
        selector.record_load(FrameId::new(1), PageId::new(0), 1);
        selector.record_load(FrameId::new(2), PageId::new(1), 2);

        // Touch page 7 so page 0 becomes the oldest.
        selector.record_hit(FrameId::new(0), PageId::new(7), 3);

        assert_eq!(selector.select_victim(&bank, &[]), FrameId::new(1));
    }

    #[test]
    fn test_lru_hit_refreshes_recency() {
        let mut selector = LruSelector::new();
        let bank = full_bank(&[7, 0]);

        selector.record_load(FrameId::new(0), PageId::new(7), 0);
        selector.record_load(FrameId::new(1), PageId::new(0), 1);
        selector.record_hit(FrameId::new(0), PageId::new(7), 2);
        selector.record_hit(FrameId::new(1), PageId::new(0), 3);

        // Page 7 was last touched at 2, page 0 at 3.
        assert_eq!(selector.select_victim(&bank, &[]), FrameId::new(0));
    }

    #[test]
    fn test_lru_tie_breaks_to_lowest_slot() {
        let mut selector = LruSelector::new();
        let bank = full_bank(&[5, 6]);

        // Same recorded position for both pages; slot 0 must win.
        selector.record_load(FrameId::new(0), PageId::new(5), 1);
        selector.record_load(FrameId::new(1), PageId::new(6), 1);

        assert_eq!(selector.select_victim(&bank, &[]), FrameId::new(0));
    }
}
