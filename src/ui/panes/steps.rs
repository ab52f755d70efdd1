//! Step log pane rendering

use super::utils::{clamp_scroll, inner_height, pane_block};
use crate::run::StepLog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the numbered step log. The newest step is emphasized.
pub fn render_steps_pane(
    frame: &mut Frame,
    area: Rect,
    steps: &StepLog,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Step-by-Step Execution ", is_focused);

    if steps.is_empty() {
        let paragraph = Paragraph::new("(no steps yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let last = steps.len() - 1;
    let all_items: Vec<ListItem> = steps
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let number = Span::styled(
                format!("Step {}: ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            );
            let text_style = if idx == last {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(Line::from(vec![
                number,
                Span::styled(entry.as_str(), text_style),
            ]))
        })
        .collect();

    let visible_height = inner_height(area);
    clamp_scroll(scroll_offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
