//! The visualization session
//!
//! A [`Session`] owns every piece of shared mutable state: the current array,
//! the data structures, both trees, run control, statistics, the step log,
//! highlight marks and the status line. It is created once per UI instance
//! and reset per run.
//!
//! # Suspension protocol
//!
//! Animated algorithms are `impl Session` methods (see [`crate::algorithms`])
//! that take a [`RunToken`] and call [`Session::suspend`] between logical
//! steps. `suspend` returns `Err(Superseded)` as soon as the token is stale;
//! callers propagate it with `?` and therefore never write to the session
//! again once another run owns it.

pub mod commands;
pub mod errors;

use crate::config::Config;
use crate::listing;
use crate::run::constants::{MAX_ARRAY_VALUE, MIN_ARRAY_VALUE, PAUSE_POLL_INTERVAL};
use crate::run::{Animated, Driver, RunControl, RunToken, Stats, StepLog, Superseded};
use crate::snapshot::{Level, Marks, Panel, Role, Snapshot, Status};
use crate::structures::{
    circular::CircularQueue, linked_list::LinkedList, queue::Queue, stack::Stack, tree::Tree,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::trace;

pub struct Session {
    pub(crate) control: RunControl,
    pub(crate) stats: Stats,
    pub(crate) steps: StepLog,
    pub(crate) marks: Marks,
    pub(crate) status: Status,
    pub(crate) panel: Panel,
    pub(crate) listing: &'static str,

    /// Committed array; replaced by a sort only once it completes
    pub(crate) array: Vec<i32>,
    /// Array as shown; a sort's private working copy while it runs
    pub(crate) canvas: Vec<i32>,

    pub(crate) stack: Stack,
    pub(crate) queue: Queue,
    pub(crate) list: LinkedList,
    pub(crate) circular: CircularQueue,
    pub(crate) bst: Tree,
    pub(crate) avl: Tree,

    pub(crate) array_size: usize,
    rng: StdRng,
}

impl Session {
    /// Create a session with a freshly generated array
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut session = Session {
            control: RunControl::new(),
            stats: Stats::default(),
            steps: StepLog::new(),
            marks: Marks::new(),
            status: Status::default(),
            panel: Panel::Array,
            listing: listing::for_panel(Panel::Array),
            array: Vec::new(),
            canvas: Vec::new(),
            stack: Stack::new(),
            queue: Queue::new(),
            list: LinkedList::new(),
            circular: CircularQueue::new(config.circular_capacity),
            bst: Tree::new(),
            avl: Tree::new(),
            array_size: config.array_size,
            rng,
        };
        session.control.set_speed(config.speed);
        session.regenerate(config.array_size);
        session
    }

    /// Create a session around a fixed array
    pub fn with_array(config: &Config, values: Vec<i32>) -> Self {
        let mut session = Session::new(config);
        session.array_size = values.len();
        session.canvas = values.clone();
        session.array = values;
        session
    }

    /// Borrowed view for renderers
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            panel: self.panel,
            canvas: &self.canvas,
            stack: &self.stack,
            queue: &self.queue,
            list: &self.list,
            circular: &self.circular,
            bst: &self.bst,
            avl: &self.avl,
            marks: &self.marks,
            steps: &self.steps,
            stats: &self.stats,
            status: &self.status,
            listing: self.listing,
            animating: self.control.is_animating(),
            paused: self.control.is_paused(),
            speed: self.control.speed(),
        }
    }

    /// Snapshot plus mutable run control, for drivers that wait
    fn view_and_control(&mut self) -> (Snapshot<'_>, &mut RunControl) {
        let Session {
            control,
            stats,
            steps,
            marks,
            status,
            panel,
            listing,
            canvas,
            stack,
            queue,
            list,
            circular,
            bst,
            avl,
            ..
        } = self;
        let snapshot = Snapshot {
            panel: *panel,
            canvas,
            stack,
            queue,
            list,
            circular,
            bst,
            avl,
            marks,
            steps,
            stats,
            status,
            listing,
            animating: control.is_animating(),
            paused: control.is_paused(),
            speed: control.speed(),
        };
        (snapshot, control)
    }

    pub fn control(&self) -> &RunControl {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut RunControl {
        &mut self.control
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn steps(&self) -> &StepLog {
        &self.steps
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn array(&self) -> &[i32] {
        &self.array
    }

    pub fn canvas(&self) -> &[i32] {
        &self.canvas
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn list(&self) -> &LinkedList {
        &self.list
    }

    pub fn circular(&self) -> &CircularQueue {
        &self.circular
    }

    pub fn bst(&self) -> &Tree {
        &self.bst
    }

    pub fn avl(&self) -> &Tree {
        &self.avl
    }

    pub fn speed(&self) -> Duration {
        self.control.speed()
    }

    pub fn set_panel(&mut self, panel: Panel) {
        self.panel = panel;
        self.listing = listing::for_panel(panel);
    }

    /// Begin an animated run: bump the run id, clear stats, steps and marks.
    ///
    /// Returns `None` (and changes nothing) while another run is animating.
    pub(crate) fn start_run(&mut self) -> Option<RunToken> {
        let token = self.control.begin()?;
        self.stats.reset();
        self.steps.clear();
        self.marks.clear();
        Some(token)
    }

    pub(crate) fn finish_run(&mut self, token: RunToken) {
        self.control.finish(token);
    }

    /// Suspension point using the session's step delay
    pub fn suspend(&mut self, driver: &mut dyn Driver, token: RunToken) -> Animated {
        self.suspend_for(driver, self.control.speed(), token)
    }

    /// Suspension point.
    ///
    /// Paints the current state, then lets `duration` pass in slices of at
    /// most [`PAUSE_POLL_INTERVAL`]. Slices spent paused do not count toward
    /// `duration`. Fails with [`Superseded`] at the first poll that finds
    /// `token` stale, including the final one after the wait elapsed.
    pub fn suspend_for(
        &mut self,
        driver: &mut dyn Driver,
        duration: Duration,
        token: RunToken,
    ) -> Animated {
        driver.present(&self.snapshot());
        let mut shown_paused = self.control.is_paused();
        let mut remaining = duration;

        loop {
            if !self.control.is_current(token) {
                trace!(run = token.id(), "stale run stopped at suspension point");
                return Err(Superseded);
            }

            let paused = self.control.is_paused();
            if paused != shown_paused {
                shown_paused = paused;
                driver.present(&self.snapshot());
            }

            if paused {
                let (snapshot, control) = self.view_and_control();
                driver.wait(PAUSE_POLL_INTERVAL, &snapshot, control);
                continue;
            }

            if remaining.is_zero() {
                return Ok(());
            }

            let slice = remaining.min(PAUSE_POLL_INTERVAL);
            let (snapshot, control) = self.view_and_control();
            driver.wait(slice, &snapshot, control);
            remaining = remaining.saturating_sub(slice);
        }
    }

    /// Fixed cosmetic delay that ignores supersession and pause
    pub(crate) fn cosmetic_delay(&mut self, driver: &mut dyn Driver, duration: Duration) {
        driver.present(&self.snapshot());
        let (snapshot, control) = self.view_and_control();
        driver.wait(duration, &snapshot, control);
    }

    pub(crate) fn log(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        trace!(step = self.steps.len() + 1, "{}", entry);
        self.steps.push(entry);
    }

    pub(crate) fn set_status(&mut self, message: impl Into<String>, level: Level) {
        self.status = Status::new(message, level);
    }

    /// Replace all marks with the given role sets
    pub(crate) fn highlight<const N: usize>(&mut self, roles: [(Role, &[usize]); N]) {
        self.marks.clear();
        for (role, indices) in roles {
            self.marks.set(role, indices.iter().copied());
        }
    }

    pub(crate) fn tree(&self, kind: crate::command::TreeKind) -> &Tree {
        match kind {
            crate::command::TreeKind::Bst => &self.bst,
            crate::command::TreeKind::Avl => &self.avl,
        }
    }

    pub(crate) fn tree_mut(&mut self, kind: crate::command::TreeKind) -> &mut Tree {
        match kind {
            crate::command::TreeKind::Bst => &mut self.bst,
            crate::command::TreeKind::Avl => &mut self.avl,
        }
    }

    /// Replace the array with `size` random values
    pub(crate) fn regenerate(&mut self, size: usize) {
        self.array_size = size;
        self.array = (0..size)
            .map(|_| self.rng.gen_range(MIN_ARRAY_VALUE..=MAX_ARRAY_VALUE))
            .collect();
        self.canvas = self.array.clone();
        self.marks.clear();
    }
}

/// Format values the way step-log lines show arrays
pub(crate) fn format_array(values: &[i32]) -> String {
    let items: Vec<String> = values.iter().map(i32::to_string).collect();
    format!("[{}]", items.join(", "))
}
