//! Main TUI application state and logic

use super::driver::TerminalDriver;
use super::panes::{self, RunIndicator};
use crate::command::Command;
use crate::config::clamp_speed;
use crate::run::constants::SPEED_STEP_MS;
use crate::run::RunControl;
use crate::session::Session;
use crate::snapshot::{Level, Panel, Snapshot};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Main,
    Steps,
    Code,
}

impl FocusedPane {
    /// Move focus to the next pane (main -> steps -> code)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Main => FocusedPane::Steps,
            FocusedPane::Steps => FocusedPane::Code,
            FocusedPane::Code => FocusedPane::Main,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Main => FocusedPane::Code,
            FocusedPane::Steps => FocusedPane::Main,
            FocusedPane::Code => FocusedPane::Steps,
        }
    }
}

/// Outcome of one key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Redraw,
    Submit(Command),
    Quit,
}

/// Everything the UI owns that is not session state
#[derive(Debug)]
pub struct UiState {
    /// Currently focused pane
    pub focus: FocusedPane,

    /// Per-pane scroll offsets; `usize::MAX` on the step log follows the tail
    pub main_scroll: usize,
    pub steps_scroll: usize,
    pub code_scroll: usize,

    /// Command line being typed, if the prompt is open
    pub input: Option<String>,

    /// Non-animated commands waiting for the current run to unwind
    pub pending: VecDeque<Command>,

    /// Message that overrides the session status until the next command
    pub notice: Option<(String, Level)>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            focus: FocusedPane::Main,
            main_scroll: 0,
            steps_scroll: usize::MAX,
            code_scroll: 0,
            input: None,
            pending: VecDeque::new(),
            notice: None,
            should_quit: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    fn notify(&mut self, message: impl Into<String>, level: Level) {
        self.notice = Some((message.into(), level));
    }

    /// Handle one key press.
    ///
    /// Pause, resume, speed, reset and quit act on `control` right away so
    /// they take effect at the running algorithm's next suspension point.
    /// Everything else is returned for the caller to dispatch.
    pub fn handle_key(&mut self, key: KeyEvent, control: &mut RunControl) -> Action {
        if self.input.is_some() {
            return self.handle_input_key(key, control);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                control.supersede();
                self.should_quit = true;
                Action::Quit
            }
            KeyCode::Char(':') => {
                self.input = Some(String::new());
                Action::Redraw
            }
            KeyCode::Char(' ') => {
                // 200ms debounce to prevent key repeat spam
                if self.last_space_press.elapsed() < Duration::from_millis(200) {
                    return Action::None;
                }
                self.last_space_press = Instant::now();
                control.toggle_pause();
                if control.is_paused() {
                    self.notify("Paused", Level::Info);
                } else {
                    self.notify("Resumed", Level::Info);
                }
                Action::Redraw
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                control.supersede();
                Action::Submit(Command::Reset)
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let ms = (control.speed().as_millis() as u64).saturating_sub(SPEED_STEP_MS);
                self.set_speed(ms, control);
                Action::Redraw
            }
            KeyCode::Char('-') => {
                let ms = control.speed().as_millis() as u64 + SPEED_STEP_MS;
                self.set_speed(ms, control);
                Action::Redraw
            }
            KeyCode::Char(c @ '1'..='7') => {
                let index = c as usize - '1' as usize;
                self.main_scroll = 0;
                self.code_scroll = 0;
                Action::Submit(Command::Show(Panel::ALL[index]))
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                Action::Redraw
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                Action::Redraw
            }
            KeyCode::Up => {
                match self.focus {
                    FocusedPane::Main => self.main_scroll = self.main_scroll.saturating_sub(1),
                    FocusedPane::Steps => self.steps_scroll = self.steps_scroll.saturating_sub(1),
                    FocusedPane::Code => self.code_scroll = self.code_scroll.saturating_sub(1),
                }
                Action::Redraw
            }
            KeyCode::Down => {
                match self.focus {
                    FocusedPane::Main => self.main_scroll = self.main_scroll.saturating_add(1),
                    FocusedPane::Steps => self.steps_scroll = self.steps_scroll.saturating_add(1),
                    FocusedPane::Code => self.code_scroll = self.code_scroll.saturating_add(1),
                }
                Action::Redraw
            }
            KeyCode::End => {
                self.steps_scroll = usize::MAX;
                Action::Redraw
            }
            _ => Action::None,
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent, control: &mut RunControl) -> Action {
        let Some(line) = self.input.as_mut() else {
            return Action::None;
        };

        match key.code {
            KeyCode::Char(c) => {
                line.push(c);
                Action::Redraw
            }
            KeyCode::Backspace => {
                line.pop();
                Action::Redraw
            }
            KeyCode::Esc => {
                self.input = None;
                Action::Redraw
            }
            KeyCode::Enter => {
                let line = self.input.take().unwrap_or_default();
                if line.trim().is_empty() {
                    return Action::Redraw;
                }
                match Command::parse(&line) {
                    Ok(command) if command.is_animated() && control.is_animating() => {
                        // Only one run may own the display
                        debug!(?command, "ignored while a run is animating");
                        self.notify("Busy: wait for the current run or reset", Level::Info);
                        Action::Redraw
                    }
                    Ok(command) => {
                        self.apply_control(&command, control);
                        Action::Submit(command)
                    }
                    Err(err) => {
                        debug!(%err, line, "command line rejected");
                        self.notify(err.to_string(), Level::Error);
                        Action::Redraw
                    }
                }
            }
            _ => Action::None,
        }
    }

    /// Run-control commands take effect before they are dispatched
    fn apply_control(&mut self, command: &Command, control: &mut RunControl) {
        match command {
            Command::Stop => control.stop(),
            Command::Resume => control.resume(),
            Command::Reset => control.supersede(),
            Command::Speed(ms) => control.set_speed(clamp_speed(*ms)),
            _ => {}
        }
    }

    fn set_speed(&mut self, ms: u64, control: &mut RunControl) {
        control.set_speed(clamp_speed(ms));
        self.notify(
            format!("Speed: {} ms per step", control.speed().as_millis()),
            Level::Info,
        );
    }
}

/// Render the whole screen for `snapshot`
pub(crate) fn render(frame: &mut Frame, snapshot: &Snapshot<'_>, ui: &mut UiState) {
    let size = frame.area();

    // Panes, command prompt, status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[0]);

    // Left column: visualization (top) | steps (bottom)
    let left_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(columns[0]);

    // Right column: code (top) | stats (bottom)
    let right_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[1]);

    let main_focused = ui.focus == FocusedPane::Main;
    let main_area = left_rows[0];
    match snapshot.panel {
        Panel::Array => {
            panes::render_array_pane(frame, main_area, snapshot.canvas, snapshot.marks, main_focused)
        }
        Panel::Stack => panes::render_stack_pane(frame, main_area, snapshot.stack, main_focused),
        Panel::Queue => panes::render_queue_pane(frame, main_area, snapshot.queue, main_focused),
        Panel::LinkedList => {
            panes::render_list_pane(frame, main_area, snapshot.list, main_focused)
        }
        Panel::CircularQueue => panes::render_circular_pane(
            frame,
            main_area,
            snapshot.circular,
            snapshot.marks,
            main_focused,
        ),
        Panel::Bst | Panel::Avl => {
            let Some(tree) = snapshot.tree() else {
                return;
            };
            panes::render_tree_pane(
                frame,
                main_area,
                snapshot.panel.title(),
                tree,
                snapshot.marks,
                snapshot.panel == Panel::Avl,
                main_focused,
                &mut ui.main_scroll,
            );
        }
    }

    // The step log follows new entries unless the user is reading it
    if ui.focus != FocusedPane::Steps {
        ui.steps_scroll = usize::MAX;
    }
    panes::render_steps_pane(
        frame,
        left_rows[1],
        snapshot.steps,
        ui.focus == FocusedPane::Steps,
        &mut ui.steps_scroll,
    );

    panes::render_code_pane(
        frame,
        right_rows[0],
        snapshot.listing,
        ui.focus == FocusedPane::Code,
        &mut ui.code_scroll,
    );

    panes::render_stats_pane(
        frame,
        right_rows[1],
        snapshot.stats,
        snapshot.speed,
        snapshot.panel == Panel::Avl,
        false,
    );

    panes::render_command_line(frame, main_chunks[1], ui.input.as_deref());

    let (message, level) = match &ui.notice {
        Some((message, level)) => (message.as_str(), *level),
        None => (snapshot.status.message.as_str(), snapshot.status.level),
    };
    let indicator = match (snapshot.animating, snapshot.paused) {
        (false, _) => RunIndicator::Idle,
        (true, true) => RunIndicator::Paused,
        (true, false) => RunIndicator::Running,
    };
    panes::render_status_bar(
        frame,
        main_chunks[2],
        snapshot.panel.title(),
        message,
        level,
        indicator,
    );
}

/// The main application: a session plus the UI state around it
pub struct App {
    pub session: Session,
    pub ui: UiState,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            ui: UiState::new(),
        }
    }

    /// Run the TUI application until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let snapshot = self.session.snapshot();
            terminal.draw(|f| render(f, &snapshot, &mut self.ui))?;

            if self.ui.should_quit {
                break;
            }

            if let Some(command) = self.ui.pending.pop_front() {
                self.dispatch(command, terminal)?;
                continue;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        let action = self.ui.handle_key(key, self.session.control_mut());
                        if let Action::Submit(command) = action {
                            self.ui.pending.push_back(command);
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Execute one command, animating through the terminal
    fn dispatch<B: Backend>(
        &mut self,
        command: Command,
        terminal: &mut Terminal<B>,
    ) -> io::Result<()> {
        self.ui.notice = None;
        let mut driver = TerminalDriver::new(terminal, &mut self.ui);
        // Rejections are already on the status line
        let _ = self.session.execute(command, &mut driver);
        driver.finish()
    }
}
