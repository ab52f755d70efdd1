//! TUI pane rendering modules
//!
//! Every pane is a stateless `render_*` function that paints part of a
//! [`Snapshot`](crate::snapshot::Snapshot). Scroll offsets are owned by the
//! caller and passed in by reference.
//!
//! # Pane Modules
//!
//! - [`array`]: bar chart of the array with role colors
//! - [`linear`]: stack, queue, linked list and circular queue
//! - [`tree`]: BST and AVL outline with heights and balance factors
//! - [`steps`]: numbered step log
//! - [`code`]: reference listing with syntax highlighting
//! - [`stats`]: run counters and step delay
//! - [`status`]: status bar, run indicator and command prompt

mod utils;

pub mod array;
pub mod code;
pub mod linear;
pub mod stats;
pub mod status;
pub mod steps;
pub mod tree;

pub use array::render_array_pane;
pub use code::render_code_pane;
pub use linear::{render_circular_pane, render_list_pane, render_queue_pane, render_stack_pane};
pub use stats::render_stats_pane;
pub use status::{render_command_line, render_status_bar, RunIndicator};
pub use steps::render_steps_pane;
pub use tree::render_tree_pane;
