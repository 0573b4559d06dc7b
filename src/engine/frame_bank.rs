//! Frame bank - the fixed set of physical frames.
//!
//! A [`FrameBank`] is an ordered sequence of slots, each holding either a
//! resident page or nothing. The slot count is fixed for the whole run and a
//! page occupies at most one slot at any time.

use crate::common::{FrameId, PageId};

/// A fixed-size bank of page frames.
///
/// All slots start empty. The driver fills empty slots lowest-index-first
/// and installs replacement pages into whichever slot the active policy
/// picks as the victim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBank {
    /// One entry per frame; `None` means the frame is empty.
    slots: Vec<Option<PageId>>,
}

impl FrameBank {
    /// Create a bank of `frame_count` empty frames.
    pub fn new(frame_count: usize) -> Self {
        Self {
            slots: vec![None; frame_count],
        }
    }

    /// Number of frames in the bank.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// The slot currently holding `page`, if it is resident.
    pub fn slot_of(&self, page: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|&slot| slot == Some(page))
            .map(FrameId::new)
    }

    /// The lowest-indexed empty slot, if any.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots
            .iter()
            .position(Option::is_none)
            .map(FrameId::new)
    }

    /// The page resident in `slot`, if any.
    pub fn occupant(&self, slot: FrameId) -> Option<PageId> {
        self.slots.get(slot.0).copied().flatten()
    }

    /// Install `page` into `slot`, returning the evicted occupant if the
    /// slot was not empty.
    pub fn install(&mut self, slot: FrameId, page: PageId) -> Option<PageId> {
        self.slots[slot.0].replace(page)
    }

    /// Iterate occupied slots in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|page| (FrameId::new(i), page)))
    }

    /// An owned copy of the current slot contents, in slot order.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }
}
