//! Shared replay handle for auto-run playback.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

use crate::engine::Step;
use crate::replay::session::{ReplaySession, ReplayState};

/// A cloneable, lock-guarded handle to a [`ReplaySession`].
///
/// Auto-run needs one loop advancing the cursor while another handle (a UI
/// thread, a test) pauses or resets it. The single mutex around the session
/// is the whole locking story: the lock is released between steps, so a
/// pause always lands before the next step begins and never interrupts one
/// mid-update.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<ReplaySession>>,
}

impl SharedSession {
    /// Wrap a session for shared access.
    pub fn new(session: ReplaySession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Current playback state.
    pub fn state(&self) -> ReplayState {
        self.inner.lock().state()
    }

    /// Index of the next step to replay.
    pub fn cursor(&self) -> usize {
        self.inner.lock().cursor()
    }

    /// Begin auto-run (Idle → Running).
    pub fn start(&self) {
        self.inner.lock().start();
    }

    /// Advance exactly one step, returning an owned copy.
    pub fn step(&self) -> Option<Step> {
        self.inner.lock().step().cloned()
    }

    /// Suspend auto-run; takes effect before the next step.
    pub fn pause(&self) {
        self.inner.lock().pause();
    }

    /// Resume a paused session.
    pub fn resume(&self) {
        self.inner.lock().resume();
    }

    /// Return the session to Idle, discarding progress.
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Change the auto-run pacing.
    pub fn set_step_delay(&self, step_delay: Duration) {
        self.inner.lock().set_step_delay(step_delay);
    }

    /// Drive auto-run until the session pauses, resets, or finishes.
    ///
    /// Calls `on_step` for each replayed step, sleeping the configured
    /// delay between steps. The lock is held only while advancing, so other
    /// handles can pause or reset between steps; this loop then returns and
    /// a later `resume` + `run` picks up where it left off.
    pub fn run<F: FnMut(&Step)>(&self, mut on_step: F) {
        loop {
            let (step, delay) = {
                let mut session = self.inner.lock();
                if session.state() != ReplayState::Running {
                    return;
                }
                let delay = session.step_delay();
                match session.step().cloned() {
                    Some(step) => (step, delay),
                    None => return,
                }
            };

            on_step(&step);

            if self.state() != ReplayState::Running {
                return;
            }
            thread::sleep(delay);
        }
    }
}
