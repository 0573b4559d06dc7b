//! pagesim - a page replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                         pagesim                           │
//! ├───────────────────────────────────────────────────────────┤
//! │  ┌───────────────────────────────────────────────────┐   │
//! │  │        Replacement Engine (engine/)               │   │
//! │  │  ┌─────────────────────────────────────────────┐  │   │
//! │  │  │  Policies: FIFO | LRU | Optimal | LFU       │  │   │
//! │  │  │        (selected per simulation run)        │  │   │
//! │  │  └─────────────────────────────────────────────┘  │   │
//! │  │     simulate() → Trace {Steps, totals}            │   │
//! │  └───────────────────────────────────────────────────┘   │
//! │                           ↓                               │
//! │  ┌───────────────────────────────────────────────────┐   │
//! │  │         Replay Layer (replay/)                    │   │
//! │  │  ReplaySession {Idle|Running|Paused|Finished}     │   │
//! │  │  SharedSession: auto-run + pause/resume           │   │
//! │  └───────────────────────────────────────────────────┘   │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error)
//! - [`engine`] - The simulation engine and its policies
//! - [`replay`] - Step-by-step playback of a finished trace
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, summarize, PageId, Policy};
//!
//! let refs: Vec<PageId> = [7u32, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]
//!     .iter()
//!     .map(|&p| PageId::new(p))
//!     .collect();
//!
//! let trace = simulate(Policy::Lru, &refs, 3).unwrap();
//! let summary = summarize(&trace);
//!
//! assert_eq!(summary.faults + summary.hits, refs.len());
//! println!("{}", summary);
//! ```

pub mod common;
pub mod engine;
pub mod replay;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageId, Result};
pub use engine::{simulate, summarize, Policy, Step, StepKind, Summary, Trace};
pub use replay::{ReplaySession, ReplayState, SharedSession};
