//! Reference code pane rendering with syntax highlighting
//!
//! Shows the listing for the active algorithm or structure, with line
//! numbers and keyword highlighting. A simple character tokenizer is enough
//! for the short listings this pane displays.

use super::utils::{clamp_scroll, inner_height, pane_block};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Simple syntax highlighting for Rust-like listings
fn highlight_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];

        // Comments run to end of line
        if c == '/' && chars.get(i + 1).is_some_and(|&(_, next)| next == '/') {
            flush_word(&mut spans, &mut current_word, false);
            spans.push(Span::styled(
                line[offset..].to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return Line::from(spans);
        }

        if !c.is_alphanumeric() && c != '_' {
            flush_word(&mut spans, &mut current_word, c == '(');

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word, false);
    Line::from(spans)
}

fn flush_word(spans: &mut Vec<Span<'_>>, word: &mut String, is_function: bool) {
    if word.is_empty() {
        return;
    }
    let style = keyword_style(word, is_function);
    spans.push(Span::styled(std::mem::take(word), style));
}

fn keyword_style(word: &str, is_function: bool) -> Style {
    match word {
        "i32" | "i64" | "usize" | "bool" | "Option" | "Node" | "Some" | "None" => {
            Style::default().fg(DEFAULT_THEME.type_name)
        }
        "fn" | "let" | "mut" | "for" | "in" | "while" | "if" | "else" | "match" | "return"
        | "break" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ if word.chars().all(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_function => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the reference listing
pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    listing: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Reference Code ", is_focused);
    let lines: Vec<&str> = listing.lines().collect();

    let visible_height = inner_height(area);
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:3} ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(highlight_line(line).spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_keeps_text() {
        let line = "    let mut min = i; // track";
        let rendered: String = highlight_line(line)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(rendered, line);
    }
}
