//! Run control for animated algorithms
//!
//! This module provides the pieces every animated command shares:
//! - [`control`]: run lifecycle manager ([`RunControl`]) and the [`RunToken`]
//!   threaded through each animated call
//! - [`stats`]: per-run statistics counters
//! - [`steps`]: per-run step log
//! - [`driver`]: the [`Driver`] seam between the core and whatever paints and
//!   waits (terminal UI, headless batch mode, tests)
//! - [`constants`]: timing and sizing limits
//!
//! # Execution Model
//!
//! Execution is single-threaded and cooperative. An animated algorithm runs
//! synchronously and yields only at suspension points
//! ([`Session::suspend`](crate::session::Session::suspend)). At each point the
//! run's token is compared with the live run id; a stale run unwinds with
//! [`Superseded`] and never touches shared state again.

pub mod constants;
pub mod control;
pub mod driver;
pub mod stats;
pub mod steps;

pub use control::{RunControl, RunId, RunToken};
pub use driver::{Driver, Immediate};
pub use stats::Stats;
pub use steps::StepLog;

use std::fmt;

/// Signal returned by a suspension point whose run has been superseded.
///
/// Animated algorithms propagate it with `?` so nothing is committed after
/// the stale run notices it lost ownership of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Superseded;

impl fmt::Display for Superseded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run superseded")
    }
}

/// Result of an animated step sequence
pub type Animated<T = ()> = Result<T, Superseded>;
