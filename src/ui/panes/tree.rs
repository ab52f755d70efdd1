//! Tree pane: BST or AVL drawn as an indented outline
//!
//! ```text
//! 5  h=3 bf=+1
//! ├─L 3  h=2 bf=0
//! │ ├─L 1  h=1 bf=0
//! │ └─R 4  h=1 bf=0
//! └─R 8  h=1 bf=0
//! ```

use super::utils::{clamp_scroll, inner_height, marked_style, pane_block};
use crate::snapshot::Marks;
use crate::structures::tree::{NodeId, Tree};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

struct Outline<'a> {
    tree: &'a Tree,
    marks: &'a Marks,
    show_balance: bool,
    lines: Vec<Line<'static>>,
}

impl Outline<'_> {
    fn node(&mut self, id: NodeId, prefix: &str, branch: &str) {
        let node = self.tree.node(id);
        let mut spans = vec![Span::styled(
            format!("{prefix}{branch}"),
            Style::default().fg(DEFAULT_THEME.comment),
        )];
        spans.push(Span::styled(
            node.value.to_string(),
            marked_style(self.marks, id),
        ));
        if self.show_balance {
            spans.push(Span::styled(
                format!("  h={} bf={:+}", node.height, self.tree.balance(Some(id))),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
        self.lines.push(Line::from(spans));

        // Children hang below this node's branch
        let child_prefix = match branch {
            "" => String::new(),
            b if b.starts_with('├') => format!("{prefix}│ "),
            _ => format!("{prefix}  "),
        };
        match (node.left, node.right) {
            (Some(left), Some(right)) => {
                self.node(left, &child_prefix, "├─L ");
                self.node(right, &child_prefix, "└─R ");
            }
            (Some(left), None) => self.node(left, &child_prefix, "└─L "),
            (None, Some(right)) => self.node(right, &child_prefix, "└─R "),
            (None, None) => {}
        }
    }
}

/// Outline lines for `tree`, root first
fn outline(tree: &Tree, marks: &Marks, show_balance: bool) -> Vec<Line<'static>> {
    let mut outline = Outline {
        tree,
        marks,
        show_balance,
        lines: Vec::new(),
    };
    if let Some(root) = tree.root() {
        outline.node(root, "", "");
    }
    outline.lines
}

pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    tree: &Tree,
    marks: &Marks,
    show_balance: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(
        " {title} ({} nodes, height {}) ",
        tree.len(),
        tree.depth()
    );
    let block = pane_block(&title, is_focused);

    if tree.is_empty() {
        let paragraph = Paragraph::new("(empty tree)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let lines = outline(tree, marks, show_balance);
    let visible_height = inner_height(area);
    clamp_scroll(scroll_offset, lines.len(), visible_height);
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_outline_shape() {
        let mut tree = Tree::new();
        let root = tree.alloc(5);
        let left = tree.alloc(3);
        let right = tree.alloc(8);
        let leaf = tree.alloc(4);
        tree.node_mut(root).left = Some(left);
        tree.node_mut(root).right = Some(right);
        tree.node_mut(left).right = Some(leaf);
        tree.set_root(Some(root));

        let lines: Vec<String> = outline(&tree, &Marks::new(), false)
            .iter()
            .map(text)
            .collect();
        assert_eq!(lines, vec!["5", "├─L 3", "│ └─R 4", "└─R 8"]);
    }
}
