//! The replacement engine.
//!
//! [`simulate`] is the single entry point: it consumes a reference string
//! and a frame count, runs the chosen [`Policy`], and returns an owned
//! [`Trace`] of everything that happened. The engine is a pure computation:
//! no I/O, no shared state, and two identical calls produce identical
//! traces.
//!
//! # Components
//! - [`FrameBank`] - the fixed set of frames
//! - [`policy`] - the victim-selection policies
//! - [`Trace`] / [`Step`] - the per-reference records
//! - [`summarize`] - aggregate statistics over a trace

mod frame_bank;
pub mod policy;
mod stats;
mod trace;

pub use frame_bank::FrameBank;
pub use policy::Policy;
pub use stats::{summarize, Summary};
pub use trace::{Step, StepKind, Trace};

use crate::common::{Error, PageId, Result};

/// Simulate page replacement over `frame_count` frames.
///
/// Processes `reference_string` in order, recording one [`Step`] per
/// reference. For each page: a hit leaves the bank untouched; a fault fills
/// the lowest-indexed empty frame, or, with the bank full, evicts the slot
/// chosen by `policy`.
///
/// # Errors
/// - [`Error::InvalidFrameCount`] if `frame_count` is 0
/// - [`Error::EmptyReferenceString`] if `reference_string` is empty
///
/// Both are rejected before any step is produced; `simulate` never returns
/// a partial trace.
///
/// # Example
/// ```
/// use pagesim::{simulate, PageId, Policy};
///
/// let refs: Vec<PageId> = [1u32, 2, 1].iter().map(|&p| PageId::new(p)).collect();
/// let trace = simulate(Policy::Fifo, &refs, 2).unwrap();
///
/// assert_eq!(trace.fault_count, 2);
/// assert_eq!(trace.hit_count, 1);
/// ```
pub fn simulate(policy: Policy, reference_string: &[PageId], frame_count: usize) -> Result<Trace> {
    if frame_count == 0 {
        return Err(Error::InvalidFrameCount(frame_count));
    }
    if reference_string.is_empty() {
        return Err(Error::EmptyReferenceString);
    }

    let mut bank = FrameBank::new(frame_count);
    let mut selector = policy.selector();
    let mut steps = Vec::with_capacity(reference_string.len());
    let mut fault_count = 0;
    let mut hit_count = 0;

    for (index, &page) in reference_string.iter().enumerate() {
        let (kind, message) = if let Some(slot) = bank.slot_of(page) {
            // Hit: the bank is untouched, only auxiliary state moves.
            hit_count += 1;
            selector.record_hit(slot, page, index);
            (StepKind::Hit, selector.describe_hit(page, slot))
        } else if let Some(slot) = bank.first_empty() {
            // Fault into an empty frame.
            fault_count += 1;
            bank.install(slot, page);
            selector.record_load(slot, page, index);
            (
                StepKind::Fault,
                format!("Page {page} loaded into Frame {slot} (FAULT - Empty frame)"),
            )
        } else {
            // Fault with a full bank: the policy picks the victim.
            fault_count += 1;
            let future = &reference_string[index + 1..];
            let slot = selector.select_victim(&bank, future);
            let message = match bank.install(slot, page) {
                Some(evicted) => selector.describe_replacement(page, evicted, slot),
                None => format!("Page {page} loaded into Frame {slot} (FAULT - Empty frame)"),
            };
            selector.record_load(slot, page, index);
            (StepKind::Fault, message)
        };

        steps.push(Step {
            position: index + 1,
            page,
            frames: bank.snapshot(),
            kind,
            message,
        });
    }

    Ok(Trace {
        steps,
        fault_count,
        hit_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_simulate_rejects_zero_frames() {
        let refs = pages(&[1, 2, 3]);
        assert_eq!(
            simulate(Policy::Fifo, &refs, 0),
            Err(Error::InvalidFrameCount(0))
        );
    }

    #[test]
    fn test_simulate_rejects_empty_reference_string() {
        assert_eq!(
            simulate(Policy::Lru, &[], 3),
            Err(Error::EmptyReferenceString)
        );
    }

    #[test]
    fn test_empty_frames_fill_lowest_index_first() {
        let refs = pages(&[4, 5, 6]);
        let trace = simulate(Policy::Fifo, &refs, 3).unwrap();

        assert_eq!(trace.fault_count, 3);
        assert_eq!(
            trace.steps[2].frames,
            vec![
                Some(PageId::new(4)),
                Some(PageId::new(5)),
                Some(PageId::new(6))
            ]
        );
        assert_eq!(
            trace.steps[0].message,
            "Page 4 loaded into Frame 0 (FAULT - Empty frame)"
        );
    }

    #[test]
    fn test_hit_leaves_bank_unchanged() {
        let refs = pages(&[1, 2, 1]);
        let trace = simulate(Policy::Lru, &refs, 2).unwrap();

        assert_eq!(trace.steps[2].kind, StepKind::Hit);
        assert_eq!(trace.steps[2].frames, trace.steps[1].frames);
        assert_eq!(trace.steps[2].message, "Page 1 found in Frame 0 (HIT)");
    }

    #[test]
    fn test_replacement_message_names_policy() {
        let refs = pages(&[1, 2, 3]);
        let trace = simulate(Policy::Fifo, &refs, 2).unwrap();

        assert_eq!(
            trace.steps[2].message,
            "Page 3 replaced Page 1 in Frame 0 (FAULT - FIFO)"
        );
    }

    #[test]
    fn test_positions_are_one_based() {
        let refs = pages(&[9, 9]);
        let trace = simulate(Policy::Optimal, &refs, 1).unwrap();

        assert_eq!(trace.steps[0].position, 1);
        assert_eq!(trace.steps[1].position, 2);
    }

    #[test]
    fn test_single_frame_bank() {
        let refs = pages(&[1, 2, 1, 2]);
        let trace = simulate(Policy::Lru, &refs, 1).unwrap();

        // Every reference misses: the single frame thrashes.
        assert_eq!(trace.fault_count, 4);
        assert_eq!(trace.hit_count, 0);
    }

    #[test]
    fn test_totals_cover_every_reference() {
        let refs = pages(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]);
        for policy in [Policy::Fifo, Policy::Lru, Policy::Optimal, Policy::Lfu] {
            let trace = simulate(policy, &refs, 3).unwrap();
            assert_eq!(trace.fault_count + trace.hit_count, refs.len());
            assert_eq!(trace.len(), refs.len());
        }
    }
}
