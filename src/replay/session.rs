//! Replay session - an owned cursor over one immutable trace.

use std::time::Duration;

use crate::engine::{Step, StepKind, Trace};

/// Default pacing between auto-run steps.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(1000);

/// Playback state of a [`ReplaySession`].
///
/// Transitions:
/// - `start`: Idle → Running
/// - `step`: advances one step; Idle → Paused on a manual first step;
///   any state → Finished when the cursor reaches the end
/// - `pause` / `resume`: Running ↔ Paused
/// - `reset`: any state → Idle, discarding the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    /// Not started (or reset); the cursor is at the beginning.
    Idle,
    /// Auto-run is advancing the cursor.
    Running,
    /// Auto-run is suspended; progress is kept.
    Paused,
    /// Every step has been replayed.
    Finished,
}

/// Replays one [`Trace`] step by step.
///
/// The session owns the trace and never mutates it; all playback state is
/// the cursor, the running hit/fault totals, and the state tag. Stepping is
/// the only way the cursor moves, so pausing always takes effect between
/// steps - no step is interrupted mid-update.
#[derive(Debug)]
pub struct ReplaySession {
    /// The trace being replayed. Immutable for the session's lifetime.
    trace: Trace,

    /// Index of the next step to replay.
    cursor: usize,

    state: ReplayState,

    /// Pacing between steps in auto-run mode.
    step_delay: Duration,

    /// Faults replayed so far.
    faults_seen: usize,

    /// Hits replayed so far.
    hits_seen: usize,
}

impl ReplaySession {
    /// Create an idle session over `trace` with the default step delay.
    pub fn new(trace: Trace) -> Self {
        Self::with_delay(trace, DEFAULT_STEP_DELAY)
    }

    /// Create an idle session with a specific auto-run step delay.
    pub fn with_delay(trace: Trace, step_delay: Duration) -> Self {
        Self {
            trace,
            cursor: 0,
            state: ReplayState::Idle,
            step_delay,
            faults_seen: 0,
            hits_seen: 0,
        }
    }

    /// The trace being replayed.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Current playback state.
    pub fn state(&self) -> ReplayState {
        self.state
    }

    /// Index of the next step to replay.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once every step has been replayed.
    pub fn is_finished(&self) -> bool {
        self.state == ReplayState::Finished
    }

    /// Faults replayed so far.
    pub fn faults_seen(&self) -> usize {
        self.faults_seen
    }

    /// Hits replayed so far.
    pub fn hits_seen(&self) -> usize {
        self.hits_seen
    }

    /// Replay progress as a whole percentage (0-100).
    pub fn progress_percent(&self) -> u32 {
        if self.trace.is_empty() {
            return 0;
        }
        (self.cursor as f64 / self.trace.len() as f64 * 100.0).round() as u32
    }

    /// Pacing between auto-run steps.
    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Change the auto-run pacing; takes effect before the next step.
    pub fn set_step_delay(&mut self, step_delay: Duration) {
        self.step_delay = step_delay;
    }

    /// Begin auto-run. Only meaningful from Idle; other states are kept.
    pub fn start(&mut self) {
        if self.state == ReplayState::Idle {
            self.state = if self.trace.is_empty() {
                ReplayState::Finished
            } else {
                ReplayState::Running
            };
        }
    }

    /// Advance exactly one step, returning it.
    ///
    /// Works regardless of auto-run state: a manual step from Idle starts
    /// the session paused. Returns `None` once the session is finished, and
    /// moves to Finished after the last step is replayed.
    pub fn step(&mut self) -> Option<&Step> {
        match self.state {
            ReplayState::Finished => return None,
            ReplayState::Idle => self.state = ReplayState::Paused,
            ReplayState::Running | ReplayState::Paused => {}
        }

        if self.cursor >= self.trace.len() {
            self.state = ReplayState::Finished;
            return None;
        }

        let index = self.cursor;
        self.cursor += 1;

        match self.trace.steps[index].kind {
            StepKind::Hit => self.hits_seen += 1,
            StepKind::Fault => self.faults_seen += 1,
        }

        if self.cursor >= self.trace.len() {
            self.state = ReplayState::Finished;
        }

        Some(&self.trace.steps[index])
    }

    /// Suspend auto-run, keeping progress.
    pub fn pause(&mut self) {
        if self.state == ReplayState::Running {
            self.state = ReplayState::Paused;
        }
    }

    /// Resume a paused session.
    pub fn resume(&mut self) {
        if self.state == ReplayState::Paused {
            self.state = ReplayState::Running;
        }
    }

    /// Flip between Running and Paused, returning true when now paused.
    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            ReplayState::Running => self.state = ReplayState::Paused,
            ReplayState::Paused => self.state = ReplayState::Running,
            ReplayState::Idle | ReplayState::Finished => {}
        }
        self.state == ReplayState::Paused
    }

    /// Return to Idle, discarding the cursor and running totals.
    ///
    /// The trace itself is kept, so the same run can be replayed again;
    /// replaying a different input means building a session from a fresh
    /// `simulate` result.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.faults_seen = 0;
        self.hits_seen = 0;
        self.state = ReplayState::Idle;
    }
}
