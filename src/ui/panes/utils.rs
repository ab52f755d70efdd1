//! Shared helpers for pane rendering
//!
//! All functions here are `pub(super)`, visible only within the panes module.

use crate::snapshot::Marks;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border style every pane uses
pub(super) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows available inside a bordered pane, at least one
pub(super) fn inner_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp `offset` so a list of `total` rows never scrolls past its end.
///
/// `usize::MAX` therefore means "follow the bottom".
pub(super) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}

/// Style for an index, colored by its strongest role
pub(super) fn marked_style(marks: &Marks, index: usize) -> Style {
    match marks.roles_of(index).next() {
        Some(role) => Style::default()
            .fg(DEFAULT_THEME.role(role))
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(DEFAULT_THEME.fg),
    }
}
