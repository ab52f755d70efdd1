//! Run lifecycle manager
//!
//! A run is one execution of an animated command. Runs are identified by a
//! monotonically increasing id; starting a run (or superseding the current
//! one) bumps the id, which invalidates every [`RunToken`] handed out earlier.

use super::constants::DEFAULT_SPEED_MS;
use std::time::Duration;
use tracing::debug;

/// Monotonically increasing run identifier
pub type RunId = u64;

/// Proof of ownership of the display for one run.
///
/// Tokens are only minted by [`RunControl::begin`]. A token stays valid until
/// the next `begin` or [`RunControl::supersede`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken {
    id: RunId,
}

impl RunToken {
    pub fn id(&self) -> RunId {
        self.id
    }
}

/// Owns the live run id, the animating/paused flags and the step delay.
///
/// The step delay lives here rather than in the session so a driver can
/// change it while a run is suspended.
#[derive(Debug, Clone)]
pub struct RunControl {
    current: RunId,
    animating: bool,
    paused: bool,
    speed: Duration,
}

impl Default for RunControl {
    fn default() -> Self {
        RunControl {
            current: 0,
            animating: false,
            paused: false,
            speed: Duration::from_millis(DEFAULT_SPEED_MS),
        }
    }
}

impl RunControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay between two logical steps
    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Takes effect at the next suspension point
    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = speed;
    }

    /// Start a new run.
    ///
    /// Returns `None` without touching any state while another run is still
    /// animating; the caller treats that as an ignored command.
    pub fn begin(&mut self) -> Option<RunToken> {
        if self.animating {
            debug!(run = self.current, "start rejected: a run is already animating");
            return None;
        }
        self.current += 1;
        self.animating = true;
        self.paused = false;
        debug!(run = self.current, "run started");
        Some(RunToken { id: self.current })
    }

    /// Set the pause flag. Idempotent.
    pub fn stop(&mut self) {
        self.paused = true;
    }

    /// Clear the pause flag. Idempotent.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle between paused and running
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Mark the run as no longer animating, if it is still the current one
    pub fn finish(&mut self, token: RunToken) {
        if self.is_current(token) {
            self.animating = false;
            debug!(run = token.id, "run finished");
        }
    }

    /// Invalidate whatever run is in flight without starting a new one
    pub fn supersede(&mut self) {
        if self.animating {
            debug!(run = self.current, "run superseded");
        }
        self.current += 1;
        self.animating = false;
        self.paused = false;
    }

    pub fn is_current(&self, token: RunToken) -> bool {
        token.id == self.current
    }

    pub fn current_run(&self) -> RunId {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_rejects_while_animating() {
        let mut control = RunControl::new();
        let first = control.begin().unwrap();
        assert!(control.begin().is_none());
        assert!(control.is_current(first));
        assert_eq!(control.current_run(), 1);
    }

    #[test]
    fn test_begin_after_finish_invalidates_old_token() {
        let mut control = RunControl::new();
        let first = control.begin().unwrap();
        control.finish(first);
        assert!(!control.is_animating());

        let second = control.begin().unwrap();
        assert!(!control.is_current(first));
        assert!(control.is_current(second));
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_supersede_clears_flags() {
        let mut control = RunControl::new();
        let token = control.begin().unwrap();
        control.stop();
        control.supersede();

        assert!(!control.is_current(token));
        assert!(!control.is_animating());
        assert!(!control.is_paused());
    }

    #[test]
    fn test_stale_finish_is_ignored() {
        let mut control = RunControl::new();
        let stale = control.begin().unwrap();
        control.supersede();
        let fresh = control.begin().unwrap();

        control.finish(stale);
        assert!(control.is_animating());
        control.finish(fresh);
        assert!(!control.is_animating());
    }

    #[test]
    fn test_stop_and_resume_are_idempotent() {
        let mut control = RunControl::new();
        control.stop();
        control.stop();
        assert!(control.is_paused());
        control.resume();
        control.resume();
        assert!(!control.is_paused());
    }

    #[test]
    fn test_begin_clears_pause() {
        let mut control = RunControl::new();
        control.stop();
        control.begin().unwrap();
        assert!(!control.is_paused());
    }
}
