//! Optimal (Bélády) replacement policy.

use crate::common::{FrameId, PageId};
use crate::engine::frame_bank::FrameBank;
use crate::engine::policy::VictimSelector;

/// Optimal victim selection.
///
/// Keeps no state between references. On eviction it scans the remaining
/// reference-string suffix for each occupant's next use: a page that is
/// never needed again wins immediately (short-circuiting the scan in slot
/// order), otherwise the page whose next use is strictly farthest away is
/// evicted, with ties kept at the lowest slot index.
pub struct OptimalSelector;

impl OptimalSelector {
    /// Create a new optimal selector.
    pub fn new() -> Self {
        Self
    }
}

impl Default for OptimalSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl VictimSelector for OptimalSelector {
    fn name(&self) -> &'static str {
        "Optimal"
    }

    fn record_hit(&mut self, _slot: FrameId, _page: PageId, _position: usize) {}

    fn record_load(&mut self, _slot: FrameId, _page: PageId, _position: usize) {}

    fn select_victim(&mut self, bank: &FrameBank, future: &[PageId]) -> FrameId {
        let mut victim = FrameId::new(0);
        let mut farthest: Option<usize> = None;

        for (slot, page) in bank.occupied() {
            match future.iter().position(|&next| next == page) {
                // Only a strictly farther next use displaces the candidate,
                // so ties keep the lower slot.
                Some(next_use) => {
                    if farthest.map_or(true, |f| next_use > f) {
                        farthest = Some(next_use);
                        victim = slot;
                    }
                }
                // Never referenced again: evict immediately.
                None => return slot,
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

    fn pages(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_optimal_evicts_farthest_next_use() {
        let mut selector = OptimalSelector::new();
        let bank = full_bank(&[2, 0, 3]);

        // Next uses: 2 at index 2, 0 at index 0, 3 at index 1.
        let future = pages(&[0, 3, 2, 0]);
        assert_eq!(selector.select_victim(&bank, &future), FrameId::new(0));
    }

    #[test]
    fn test_optimal_prefers_page_never_used_again() {
        let mut selector = OptimalSelector::new();
        let bank = full_bank(&[7, 0, 1]);

        // Page 0 recurs farthest, but page 1 never recurs and wins outright.
        let future = pages(&[7, 7, 0]);
        assert_eq!(selector.select_victim(&bank, &future), FrameId::new(2));
    }

    #[test]
    fn test_optimal_short_circuits_on_first_absent_page() {
        let mut selector = OptimalSelector::new();
        let bank = full_bank(&[4, 5, 6]);

        // Neither 4 nor 6 recurs; the lower slot is taken without scanning on.
        let future = pages(&[5, 5]);
        assert_eq!(selector.select_victim(&bank, &future), FrameId::new(0));
    }

    #[test]
    fn test_optimal_tie_breaks_to_lowest_slot() {
        let mut selector = OptimalSelector::new();
        let bank = full_bank(&[8, 9]);

        // Both next uses at distinct positions; equal-distance ties can only
        // arise via duplicate pages, which the bank forbids, so exercise the
        // strict comparison with 9 nearer than 8.
        let future = pages(&[9, 8]);
        assert_eq!(selector.select_victim(&bank, &future), FrameId::new(0));
    }
}
