//! LFU (Least Frequently Used) replacement policy.

use std::collections::HashMap;

use crate::common::{FrameId, PageId};
use crate::engine::frame_bank::FrameBank;
use crate::engine::policy::VictimSelector;

/// LFU victim selection.
///
/// Tracks a reference count per page: set to 1 on every load and
/// incremented on every hit. The count restarts on reload - a page evicted
/// and brought back does not keep its prior count. The victim is the
/// occupied slot with the strictly smallest count, scanning slots in order
/// so ties go to the lowest slot index.
///
/// LFU step messages carry the counts, so this selector also overrides the
/// message wording.
pub struct LfuSelector {
    /// Reference count per page.
    counts: HashMap<PageId, u64>,
}

impl LfuSelector {
    /// Create a new LFU selector with no counts.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Current count for `page`, zero if never seen.
    fn count(&self, page: PageId) -> u64 {
        self.counts.get(&page).copied().unwrap_or(0)
    }
}

impl Default for LfuSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl VictimSelector for LfuSelector {
    fn name(&self) -> &'static str {
        "LFU"
    }

    fn record_hit(&mut self, _slot: FrameId, page: PageId, _position: usize) {
        *self.counts.entry(page).or_insert(0) += 1;
    }

    fn record_load(&mut self, _slot: FrameId, page: PageId, _position: usize) {
        // Frequency restarts on every load, even after a prior residency.
        self.counts.insert(page, 1);
    }

    fn select_victim(&mut self, bank: &FrameBank, _future: &[PageId]) -> FrameId {
        let mut victim = FrameId::new(0);
        let mut fewest = u64::MAX;

        for (slot, page) in bank.occupied() {
            let count = self.count(page);
            if count < fewest {
                fewest = count;
                victim = slot;
            }
        }

        victim
    }

    fn describe_hit(&self, page: PageId, slot: FrameId) -> String {
        format!(
            "Page {page} found in Frame {slot} (HIT, count: {})",
            self.count(page)
        )
    }

    fn describe_replacement(&self, incoming: PageId, evicted: PageId, slot: FrameId) -> String {
        format!(
            "Page {incoming} replaced Page {evicted} (count: {}) in Frame {slot} (FAULT - LFU)",
            self.count(evicted)
        )
    }
}
