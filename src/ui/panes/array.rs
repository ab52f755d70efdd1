//! Array pane: one bar per element, colored by its strongest role

use super::utils::pane_block;
use crate::snapshot::Marks;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup},
    Frame,
};

const BAR_GAP: u16 = 1;

pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[i32],
    marks: &Marks,
    is_focused: bool,
) {
    let block = pane_block(" Array ", is_focused);

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let color = DEFAULT_THEME.role_or_bar(marks.roles_of(idx).next());
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(value.to_string())
                .label(Line::from(idx.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let count = values.len().max(1) as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width.saturating_sub(BAR_GAP * count) / count).clamp(1, 9);

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
