//! Panes for the linear structures: stack, queue, linked list and circular
//! queue

use super::utils::{marked_style, pane_block};
use crate::snapshot::Marks;
use crate::structures::circular::{index_label, CircularQueue};
use crate::structures::{linked_list::LinkedList, queue::Queue, stack::Stack};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

fn muted(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(DEFAULT_THEME.comment))
}

fn cell(text: &str, style: Style) -> Span<'static> {
    Span::styled(format!("[ {text} ]"), style)
}

fn empty_line(what: &str) -> Line<'static> {
    Line::from(muted(format!("({what} is empty)")))
}

/// Stack drawn top-down with the top element marked
pub fn render_stack_pane(frame: &mut Frame, area: Rect, stack: &Stack, is_focused: bool) {
    let block = pane_block(" Stack ", is_focused);
    let mut lines = vec![Line::from(muted(format!(
        "Size: {}/{}",
        stack.len(),
        stack.capacity()
    )))];

    if stack.is_empty() {
        lines.push(empty_line("stack"));
    }
    for (depth, item) in stack.items().iter().rev().enumerate() {
        let mut spans = vec![cell(item, Style::default().fg(DEFAULT_THEME.fg))];
        if depth == 0 {
            spans.push(Span::styled(
                " ← top",
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Queue drawn left to right from front to rear
pub fn render_queue_pane(frame: &mut Frame, area: Rect, queue: &Queue, is_focused: bool) {
    let block = pane_block(" Queue ", is_focused);
    let mut lines = vec![Line::from(muted(format!(
        "Size: {}/{}",
        queue.len(),
        queue.capacity()
    )))];

    if queue.is_empty() {
        lines.push(empty_line("queue"));
    } else {
        let mut spans = vec![muted("front → ")];
        for item in queue.iter() {
            spans.push(cell(item, Style::default().fg(DEFAULT_THEME.fg)));
            spans.push(Span::raw(" "));
        }
        spans.push(muted("← rear"));
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Linked list drawn as a chain of nodes ending in `null`
pub fn render_list_pane(frame: &mut Frame, area: Rect, list: &LinkedList, is_focused: bool) {
    let block = pane_block(" Linked List ", is_focused);
    let mut lines = vec![Line::from(muted(format!("Size: {}", list.len())))];

    let mut spans = vec![muted("head → ")];
    for item in list.iter() {
        spans.push(cell(item, Style::default().fg(DEFAULT_THEME.fg)));
        spans.push(muted(" → "));
    }
    spans.push(muted("null"));
    lines.push(Line::from(spans));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Circular queue: slot row, pointer row and the live counters
pub fn render_circular_pane(
    frame: &mut Frame,
    area: Rect,
    queue: &CircularQueue,
    marks: &Marks,
    is_focused: bool,
) {
    let block = pane_block(" Circular Queue ", is_focused);
    let width = 6;

    let mut indices = Vec::new();
    let mut slots = Vec::new();
    let mut pointers = Vec::new();
    for (idx, slot) in queue.slots().iter().enumerate() {
        indices.push(muted(format!("{idx:^width$}")));

        let text = slot.map_or("·".to_string(), |v| v.to_string());
        let style = match slot {
            Some(_) if marks.roles_of(idx).next().is_none() => {
                Style::default().fg(DEFAULT_THEME.primary)
            }
            Some(_) => marked_style(marks, idx),
            None if marks.roles_of(idx).next().is_some() => marked_style(marks, idx),
            None => Style::default().fg(DEFAULT_THEME.comment),
        };
        slots.push(Span::styled(format!("[{text:^4}]"), style));

        let pointer = match (queue.front() == Some(idx), queue.rear() == Some(idx)) {
            (true, true) => "F,R",
            (true, false) => "F",
            (false, true) => "R",
            (false, false) => "",
        };
        pointers.push(Span::styled(
            format!("{pointer:^width$}"),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    }

    let counters = format!(
        "Front: {}  Rear: {}  Count: {}/{}  Free: {}  Status: {}",
        index_label(queue.front()),
        index_label(queue.rear()),
        queue.count(),
        queue.capacity(),
        queue.free_space(),
        queue.state_label()
    );

    let lines = vec![
        Line::from(indices),
        Line::from(slots),
        Line::from(pointers),
        Line::default(),
        Line::from(Span::styled(counters, Style::default().fg(DEFAULT_THEME.fg))),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
