//! Statistics pane: run counters and timing

use super::utils::pane_block;
use crate::run::Stats;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<13}"),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            value,
            Style::default()
                .fg(DEFAULT_THEME.number)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

pub fn render_stats_pane(
    frame: &mut Frame,
    area: Rect,
    stats: &Stats,
    speed: Duration,
    show_rotations: bool,
    is_focused: bool,
) {
    let block = pane_block(" Statistics ", is_focused);

    let mut lines = vec![
        row("Comparisons", stats.comparisons.to_string()),
        row("Swaps", stats.swaps.to_string()),
        row("Passes", stats.passes.to_string()),
    ];
    if show_rotations {
        lines.push(row("Rotations", stats.rotations.to_string()));
    }
    lines.push(Line::default());
    lines.push(row("Step delay", format!("{} ms", speed.as_millis())));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
