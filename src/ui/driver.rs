//! Terminal implementation of [`Driver`]
//!
//! Painting goes through [`render`]; waiting polls crossterm for key presses
//! until the requested time has passed, so the user can pause, change speed,
//! reset or quit while an algorithm is suspended.

use super::app::{render, Action, UiState};
use crate::run::{Driver, RunControl};
use crate::snapshot::Snapshot;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Longest single poll, so redraws stay responsive
const INPUT_POLL: Duration = Duration::from_millis(50);

pub struct TerminalDriver<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    ui: &'a mut UiState,
    /// First terminal error; later draws are skipped once one occurred
    error: Option<io::Error>,
}

impl<'a, B: Backend> TerminalDriver<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, ui: &'a mut UiState) -> Self {
        TerminalDriver {
            terminal,
            ui,
            error: None,
        }
    }

    /// Consume the driver, returning the first terminal error if any
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn draw(&mut self, snapshot: &Snapshot<'_>) {
        if self.error.is_some() {
            return;
        }
        let ui = &mut *self.ui;
        if let Err(err) = self.terminal.draw(|f| render(f, snapshot, ui)) {
            warn!(%err, "terminal draw failed");
            self.error = Some(err);
        }
    }

    fn read_key(&mut self, timeout: Duration, control: &mut RunControl) -> io::Result<Action> {
        if !event::poll(timeout)? {
            return Ok(Action::None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(self.ui.handle_key(key, control))
            }
            Event::Resize(..) => Ok(Action::Redraw),
            _ => Ok(Action::None),
        }
    }
}

impl<B: Backend> Driver for TerminalDriver<'_, B> {
    fn present(&mut self, snapshot: &Snapshot<'_>) {
        self.draw(snapshot);
    }

    fn wait(&mut self, duration: Duration, snapshot: &Snapshot<'_>, control: &mut RunControl) {
        let deadline = Instant::now() + duration;
        let was_animating = control.is_animating();
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || self.error.is_some() {
                return;
            }

            let action = match self.read_key(remaining.min(INPUT_POLL), control) {
                Ok(action) => action,
                Err(err) => {
                    warn!(%err, "terminal input failed");
                    self.error = Some(err);
                    control.supersede();
                    return;
                }
            };

            match action {
                Action::None => {}
                Action::Redraw => {
                    // Run flags may have changed since the snapshot was taken
                    let mut view = *snapshot;
                    view.paused = control.is_paused();
                    view.speed = control.speed();
                    view.animating = control.is_animating();
                    self.draw(&view);
                }
                Action::Submit(command) => {
                    debug!(?command, "queued while a run is in flight");
                    self.ui.pending.push_back(command);
                }
                Action::Quit => return,
            }

            // A superseded run unwinds at its next check; no point waiting
            if was_animating && !control.is_animating() {
                return;
            }
        }
    }
}
