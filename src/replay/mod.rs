//! Trace replay.
//!
//! The engine hands the full [`Trace`](crate::Trace) over up front; this
//! module replays it step by step for a presentation layer. Playback state
//! lives in an explicitly-owned [`ReplaySession`] rather than ambient
//! globals, so replay is unit-testable independent of any rendering.
//!
//! # Components
//! - [`ReplaySession`] - one trace, one cursor, an explicit state machine
//! - [`SharedSession`] - lock-guarded handle for auto-run with pause/resume

mod session;
mod shared;

pub use session::{ReplaySession, ReplayState, DEFAULT_STEP_DELAY};
pub use shared::SharedSession;
