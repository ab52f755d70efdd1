//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: UI state, keyboard handling, pane focus, command prompt
//!   and the idle event loop
//! - **[`driver`]**: the [`Driver`](crate::run::Driver) that paints and pumps
//!   input while an algorithm is suspended
//! - **[`panes`]**: stateless render functions for each visible pane
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Session`] and call [`App::run`] to start the event loop.
//!
//! [`Session`]: crate::session::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod driver;
pub mod panes;
pub mod theme;

pub use app::App;
