// Shared helpers for the integration tests

#![allow(dead_code)]

use algotty::config::Config;
use algotty::run::{Driver, RunControl};
use algotty::session::Session;
use algotty::snapshot::Snapshot;
use std::collections::BTreeMap;
use std::time::Duration;

/// What the scripted driver does to run control at a given wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Pause,
    Resume,
    /// What a reset or quit key does
    Supersede,
    /// Try to claim the display for a second run
    Begin,
    /// Change the step delay, in milliseconds
    Speed(u64),
}

/// One recorded `wait` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitRecord {
    pub duration: Duration,
    pub paused: bool,
}

/// Driver that records everything and replays cues at given wait indices
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    cues: BTreeMap<usize, Vec<Cue>>,
    pub waits: Vec<WaitRecord>,
    /// Step-log length seen at each present
    pub presented_steps: Vec<usize>,
    /// Comparisons seen at each present
    pub presented_comparisons: Vec<u64>,
    /// Step-log length when each cue fired
    pub steps_at_cue: Vec<(Cue, usize)>,
    /// Results of `Cue::Begin`
    pub begin_results: Vec<bool>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `cue` at the wait with zero-based index `at`
    pub fn cue(mut self, at: usize, cue: Cue) -> Self {
        self.cues.entry(at).or_default().push(cue);
        self
    }

    pub fn unpaused_time(&self) -> Duration {
        self.waits
            .iter()
            .filter(|w| !w.paused)
            .map(|w| w.duration)
            .sum()
    }
}

impl Driver for ScriptedDriver {
    fn present(&mut self, snapshot: &Snapshot<'_>) {
        self.presented_steps.push(snapshot.steps.len());
        self.presented_comparisons.push(snapshot.stats.comparisons);
    }

    fn wait(&mut self, duration: Duration, snapshot: &Snapshot<'_>, control: &mut RunControl) {
        self.waits.push(WaitRecord {
            duration,
            paused: control.is_paused(),
        });
        let index = self.waits.len() - 1;
        for cue in self.cues.remove(&index).unwrap_or_default() {
            self.steps_at_cue.push((cue, snapshot.steps.len()));
            match cue {
                Cue::Pause => control.stop(),
                Cue::Resume => control.resume(),
                Cue::Supersede => control.supersede(),
                Cue::Begin => self.begin_results.push(control.begin().is_some()),
                Cue::Speed(ms) => control.set_speed(Duration::from_millis(ms)),
            }
        }
    }
}

/// Config with the fastest speed and a fixed seed
pub fn config() -> Config {
    Config::new(100, 8, 8, Some(7))
}

pub fn session_with(values: &[i32]) -> Session {
    Session::with_array(&config(), values.to_vec())
}
