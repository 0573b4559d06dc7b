//! Replacement policy implementations.
//!
//! Each policy observes hits and loads to keep whatever auxiliary state it
//! needs, and picks the victim slot when a fault finds the bank full. The
//! driver talks to all of them through one victim-selection trait.
//!
//! Implemented policies:
//! - [`FifoSelector`] - First-In-First-Out
//! - [`LruSelector`] - Least Recently Used
//! - [`OptimalSelector`] - Bélády's optimal (lookahead)
//! - [`LfuSelector`] - Least Frequently Used

mod fifo;
mod lfu;
mod lru;
mod optimal;

pub use fifo::FifoSelector;
pub use lfu::LfuSelector;
pub use lru::LruSelector;
pub use optimal::OptimalSelector;

use crate::common::{FrameId, PageId};
use crate::engine::frame_bank::FrameBank;

/// The closed set of replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    /// First-In-First-Out: evict the page resident the longest.
    #[default]
    Fifo,
    /// Least Recently Used: evict the page untouched the longest.
    Lru,
    /// Bélády's optimal: evict the page needed farthest in the future.
    Optimal,
    /// Least Frequently Used: evict the page with the fewest references.
    Lfu,
}

impl Policy {
    /// Resolve a policy selector string.
    ///
    /// Recognizes `"fifo"`, `"lru"`, `"optimal"`, and `"lfu"`. Any other
    /// selector deterministically falls back to FIFO; this is documented
    /// behavior, not an error.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "lru" => Policy::Lru,
            "optimal" => Policy::Optimal,
            "lfu" => Policy::Lfu,
            _ => Policy::Fifo,
        }
    }

    /// The name used in step messages ("FAULT - LRU" etc).
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
            Policy::Lfu => "LFU",
        }
    }

    /// Build a fresh selector for one simulation run.
    pub(crate) fn selector(self) -> Box<dyn VictimSelector> {
        match self {
            Policy::Fifo => Box::new(FifoSelector::new()),
            Policy::Lru => Box::new(LruSelector::new()),
            Policy::Optimal => Box::new(OptimalSelector::new()),
            Policy::Lfu => Box::new(LfuSelector::new()),
        }
    }
}

/// Per-policy victim selection.
///
/// The driver loop calls [`record_hit`](Self::record_hit) and
/// [`record_load`](Self::record_load) on every reference so the selector can
/// maintain its auxiliary state, and [`select_victim`](Self::select_victim)
/// only when a fault finds no empty slot. Selectors also word the
/// policy-specific parts of step messages, since only they know details like
/// LFU reference counts.
pub(crate) trait VictimSelector {
    /// Policy name used in replacement messages.
    fn name(&self) -> &'static str;

    /// `page` was found resident in `slot` at reference-string `position`.
    fn record_hit(&mut self, slot: FrameId, page: PageId, position: usize);

    /// `page` was loaded into `slot` at `position`, either into an empty
    /// frame or over an evicted one.
    fn record_load(&mut self, slot: FrameId, page: PageId, position: usize);

    /// Choose the slot to evict. Only called when every slot is occupied,
    /// so implementations scan a non-empty bank. `future` is the suffix of
    /// the reference string strictly after the current position.
    fn select_victim(&mut self, bank: &FrameBank, future: &[PageId]) -> FrameId;

    /// Message for a hit on `page` in `slot`.
    fn describe_hit(&self, page: PageId, slot: FrameId) -> String {
        format!("Page {page} found in Frame {slot} (HIT)")
    }

    /// Message for `incoming` replacing `evicted` in `slot`.
    fn describe_replacement(&self, incoming: PageId, evicted: PageId, slot: FrameId) -> String {
        format!(
            "Page {incoming} replaced Page {evicted} in Frame {slot} (FAULT - {})",
            self.name()
        )
    }
}
