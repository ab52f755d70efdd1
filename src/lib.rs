//! # Introduction
//!
//! algotty animates classic algorithms and data structures in the terminal.
//! Every operation runs as a sequence of logical steps; between steps the
//! display is repainted and the run sleeps for the configured delay, so each
//! comparison, swap, rotation or pointer move can be followed as it happens.
//!
//! ## Execution pipeline
//!
//! ```text
//! Input → Command → Session → Algorithm ⇄ suspend → Driver → Screen
//! ```
//!
//! 1. [`command`]: parses a line of input into a validated [`command::Command`].
//! 2. [`session`]: owns all visualizer state and dispatches commands.
//! 3. [`algorithms`]: animated sorts, searches, tree inserts/searches/
//!    traversals and circular queue operations.
//! 4. [`structures`]: the plain data structures (stack, queue, linked list,
//!    circular queue, BST/AVL arena).
//! 5. [`run`]: run lifecycle, statistics, step log and the
//!    [`run::Driver`] seam.
//! 6. [`snapshot`]: the borrowed view a renderer paints.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Runs
//!
//! Only one animated run owns the display at a time. A reset or a new run
//! supersedes the old one, which notices at its next suspension point and
//! unwinds without writing anything further.

pub mod algorithms;
pub mod command;
pub mod config;
pub mod listing;
pub mod run;
pub mod session;
pub mod snapshot;
pub mod structures;
pub mod ui;
