//! Trace records - the output of one simulation run.
//!
//! A [`Trace`] is the complete ordered record of one `simulate` call: one
//! [`Step`] per reference-string position plus running fault/hit totals.
//! Traces are plain owned data with no back-references into engine state,
//! so they can be replayed, compared, and summarized freely.

use std::fmt;

use crate::common::PageId;

/// Whether a reference found its page resident or had to load it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// The requested page was already resident in a frame.
    Hit,
    /// The requested page was absent and had to be loaded.
    Fault,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Hit => write!(f, "hit"),
            StepKind::Fault => write!(f, "fault"),
        }
    }
}

/// One processed reference: what happened and what the bank looked like
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// 1-based position in the reference string.
    pub position: usize,

    /// The page that was referenced.
    pub page: PageId,

    /// Snapshot of the frame bank *after* this reference was processed.
    pub frames: Vec<Option<PageId>>,

    /// Hit or fault.
    pub kind: StepKind,

    /// Human-readable account of which slot was affected and why.
    pub message: String,
}

/// The full record of one simulation run.
///
/// Produced once per `simulate` invocation and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trace {
    /// Steps in reference-string order.
    pub steps: Vec<Step>,

    /// Total number of page faults.
    pub fault_count: usize,

    /// Total number of page hits.
    pub hit_count: usize,
}

impl Trace {
    /// Number of steps in the trace.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the trace records no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
