//! Status bar and command prompt rendering

use crate::snapshot::Level;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the run indicator on the right of the status bar shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunIndicator {
    Idle,
    Running,
    Paused,
}

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    panel_title: &str,
    message: &str,
    level: Level,
    indicator: RunIndicator,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: active panel and status message
    let left_spans = vec![
        Span::styled(
            format!(" {panel_title} "),
            Style::default()
                .bg(DEFAULT_THEME.level(level))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {message} "),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(match level {
                    Level::Error => DEFAULT_THEME.error,
                    _ => DEFAULT_THEME.fg,
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let keybinds = [
        (" : ", " cmd "),
        (" ⎵ ", " pause "),
        (" x ", " reset "),
        (" +/- ", " speed "),
        (" 1-7 ", " panel "),
        (" ⇥ ", " focus "),
        ("q", " quit "),
    ];
    let mut right_spans = Vec::new();
    for (idx, (key, desc)) in keybinds.into_iter().enumerate() {
        if idx > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let (label, color) = match indicator {
        RunIndicator::Running => (" ▶ RUNNING ", DEFAULT_THEME.secondary),
        RunIndicator::Paused => (" ⏸ PAUSED ", DEFAULT_THEME.error),
        RunIndicator::Idle => (" IDLE ", DEFAULT_THEME.success),
    };
    right_spans.push(Span::styled("│", sep_style));
    right_spans.push(Span::styled(
        label,
        Style::default()
            .bg(color)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}

/// Render the one-line command prompt. `input` is `None` outside input mode.
pub fn render_command_line(frame: &mut Frame, area: Rect, input: Option<&str>) {
    let line = match input {
        Some(text) => Line::from(vec![
            Span::styled(
                " : ",
                Style::default()
                    .bg(DEFAULT_THEME.primary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {text}"), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled("█", Style::default().fg(DEFAULT_THEME.primary)),
        ]),
        None => Line::from(Span::styled(
            " press : to type a command, e.g. sort bubble, push 5, bst insert 5,3,8",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
