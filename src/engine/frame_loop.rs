//! Scheduler bookkeeping for the per-refresh tick.
//!
//! The host (a `requestAnimationFrame` callback on the web) owns the actual
//! timer. This type only answers "should this tick do any work?" and makes
//! sure one surface never has two loops.

use std::cell::Cell;
use std::rc::Rc;

/// Shared cancellation flag. Cloning shares the flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Owns a loop's token and cancels it when dropped, so a handle that goes
/// away without an explicit stop still ends the loop.
#[derive(Debug)]
pub struct LoopGuard(CancelToken);

impl LoopGuard {
    pub fn new(token: CancelToken) -> Self {
        Self(token)
    }

    pub fn token(&self) -> &CancelToken {
        &self.0
    }
}

impl Drop for LoopGuard {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Do the frame's work and re-arm.
    Run,
    /// Do nothing and do not re-arm.
    Stop,
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    token: Option<CancelToken>,
    ticks: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the loop. Returns `None` when it is already running.
    pub fn start(&mut self) -> Option<CancelToken> {
        if self.is_running() {
            return None;
        }
        let token = CancelToken::new();
        self.token = Some(token.clone());
        Some(token)
    }

    pub fn is_running(&self) -> bool {
        self.token.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// Gate for the start of every tick. A cancelled token or a missing
    /// surface ends the loop for good.
    pub fn begin_tick(&mut self, surface_ready: bool) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Stop;
        }
        if !surface_ready {
            self.stop();
            return TickOutcome::Stop;
        }
        self.ticks += 1;
        TickOutcome::Run
    }

    pub fn stop(&mut self) {
        if let Some(t) = self.token.take() {
            t.cancel();
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
