//! The seam between the core and whatever paints snapshots and lets time pass

use super::control::RunControl;
use crate::snapshot::Snapshot;
use std::time::Duration;

/// Renderer sink plus clock.
///
/// The core calls [`Driver::present`] whenever the display changes at a
/// suspension point and [`Driver::wait`] to let time pass. A driver may react
/// to user input during `wait` by pausing, resuming or superseding through
/// the supplied [`RunControl`]; it never reads or writes session state.
pub trait Driver {
    /// Paint the snapshot. Nothing is ever read back.
    fn present(&mut self, snapshot: &Snapshot<'_>);

    /// Let up to `duration` of time pass.
    ///
    /// `snapshot` is the state last presented, for drivers that repaint while
    /// waiting (e.g. to echo typed input or a pause toggle).
    fn wait(&mut self, duration: Duration, snapshot: &Snapshot<'_>, control: &mut RunControl);
}

/// Driver that neither paints nor waits.
///
/// Used for headless batch runs: every animated command completes in one
/// call. Nothing in this driver clears a pause, so a paused session must
/// not be driven with it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Immediate;

impl Driver for Immediate {
    fn present(&mut self, _snapshot: &Snapshot<'_>) {}

    fn wait(&mut self, _duration: Duration, _snapshot: &Snapshot<'_>, _control: &mut RunControl) {}
}
