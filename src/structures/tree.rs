//! Arena-backed binary tree
//!
//! Nodes live in a pool and link to each other by [`NodeId`]. Animated
//! algorithms recurse over ids while holding the session mutably, which an
//! owning `Box` tree would not allow across suspension points.
//!
//! # Storage
//!
//! Freed slots go onto a free list and are reused by the next allocation.
//! A freed id is never reachable from `root`, so stale contents in a freed
//! slot are never observed.
//!
//! # Heights
//!
//! Every node carries a height (leaf = 1, missing child = 0). The plain BST
//! engine keeps it up to date too, which costs nothing and lets the renderer
//! show the same annotations for both trees.

use std::fmt;

/// Index of a node in its tree's pool
pub type NodeId = usize;

#[derive(Debug, Clone)]
pub struct Node {
    pub value: i32,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub height: u32,
}

/// Depth-first visiting order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    InOrder,
    PreOrder,
    PostOrder,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::InOrder => write!(f, "In-order"),
            Order::PreOrder => write!(f, "Pre-order"),
            Order::PostOrder => write!(f, "Post-order"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tree {
    pool: Vec<Node>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.pool[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.pool[id]
    }

    pub fn value(&self, id: NodeId) -> i32 {
        self.pool[id].value
    }

    /// Allocate a detached leaf
    pub fn alloc(&mut self, value: i32) -> NodeId {
        let node = Node {
            value,
            left: None,
            right: None,
            height: 1,
        };
        match self.free.pop() {
            Some(id) => {
                self.pool[id] = node;
                id
            }
            None => {
                self.pool.push(node);
                self.pool.len() - 1
            }
        }
    }

    pub fn release(&mut self, id: NodeId) {
        self.free.push(id);
    }

    /// Height of an optional subtree
    pub fn height(&self, link: Option<NodeId>) -> u32 {
        link.map_or(0, |id| self.pool[id].height)
    }

    /// height(left) - height(right)
    pub fn balance(&self, link: Option<NodeId>) -> i32 {
        link.map_or(0, |id| {
            let node = &self.pool[id];
            self.height(node.left) as i32 - self.height(node.right) as i32
        })
    }

    pub fn update_height(&mut self, id: NodeId) {
        let node = &self.pool[id];
        let height = 1 + self.height(node.left).max(self.height(node.right));
        self.pool[id].height = height;
    }

    /// Leftmost node of the subtree rooted at `id`
    pub fn find_min(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.pool[id].left {
            id = left;
        }
        id
    }

    /// Ids along the search path for `value`, ending at the match if any
    #[cfg(test)]
    pub fn search_path(&self, value: i32) -> (Vec<NodeId>, Option<NodeId>) {
        let mut path = Vec::new();
        let mut current = self.root;
        while let Some(id) = current {
            path.push(id);
            let node = &self.pool[id];
            current = match value.cmp(&node.value) {
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
                std::cmp::Ordering::Equal => return (path, Some(id)),
            };
        }
        (path, None)
    }

    /// Node ids in the given order
    pub fn traverse(&self, order: Order) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.visit(self.root, order, &mut out);
        out
    }

    fn visit(&self, link: Option<NodeId>, order: Order, out: &mut Vec<NodeId>) {
        let Some(id) = link else { return };
        let node = &self.pool[id];
        if order == Order::PreOrder {
            out.push(id);
        }
        self.visit(node.left, order, out);
        if order == Order::InOrder {
            out.push(id);
        }
        self.visit(node.right, order, out);
        if order == Order::PostOrder {
            out.push(id);
        }
    }

    /// Values in the given order
    pub fn values(&self, order: Order) -> Vec<i32> {
        self.traverse(order)
            .into_iter()
            .map(|id| self.pool[id].value)
            .collect()
    }

    /// Number of reachable nodes
    pub fn len(&self) -> usize {
        self.traverse(Order::PreOrder).len()
    }

    /// Height of the whole tree, 0 when empty
    pub fn depth(&self) -> u32 {
        self.height(self.root)
    }

    /// Standard BST delete.
    ///
    /// Returns whether a node was removed. Heights along the path are
    /// refreshed, but no rebalancing happens here.
    pub fn remove(&mut self, value: i32) -> bool {
        let (root, removed) = self.remove_from(self.root, value);
        self.root = root;
        removed
    }

    fn remove_from(&mut self, link: Option<NodeId>, value: i32) -> (Option<NodeId>, bool) {
        let Some(id) = link else {
            return (None, false);
        };
        let node = self.pool[id].clone();
        let removed = if value < node.value {
            let (left, removed) = self.remove_from(node.left, value);
            self.pool[id].left = left;
            removed
        } else if value > node.value {
            let (right, removed) = self.remove_from(node.right, value);
            self.pool[id].right = right;
            removed
        } else {
            match (node.left, node.right) {
                (None, child) | (child, None) => {
                    self.release(id);
                    return (child, true);
                }
                (Some(_), Some(right)) => {
                    let successor = self.pool[self.find_min(right)].value;
                    self.pool[id].value = successor;
                    let (right, _) = self.remove_from(Some(right), successor);
                    self.pool[id].right = right;
                    true
                }
            }
        };
        self.update_height(id);
        (Some(id), removed)
    }

    pub fn clear(&mut self) {
        self.pool.clear();
        self.free.clear();
        self.root = None;
    }

    /// Whether an in-order walk is strictly ascending
    pub fn is_ordered(&self) -> bool {
        self.values(Order::InOrder)
            .windows(2)
            .all(|pair| pair[0] < pair[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain recursive insert used to build fixtures
    fn insert(tree: &mut Tree, link: Option<NodeId>, value: i32) -> NodeId {
        let Some(id) = link else {
            return tree.alloc(value);
        };
        if value < tree.value(id) {
            let left = insert(tree, tree.node(id).left, value);
            tree.node_mut(id).left = Some(left);
        } else if value > tree.value(id) {
            let right = insert(tree, tree.node(id).right, value);
            tree.node_mut(id).right = Some(right);
        }
        tree.update_height(id);
        id
    }

    fn build(values: &[i32]) -> Tree {
        let mut tree = Tree::new();
        for &v in values {
            let current = tree.root();
            let root = insert(&mut tree, current, v);
            tree.set_root(Some(root));
        }
        tree
    }

    #[test]
    fn test_traversal_orders() {
        let tree = build(&[50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(tree.values(Order::InOrder), vec![20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(tree.values(Order::PreOrder), vec![50, 30, 20, 40, 70, 60, 80]);
        assert_eq!(tree.values(Order::PostOrder), vec![20, 40, 30, 60, 80, 70, 50]);
    }

    #[test]
    fn test_remove_leaf_one_child_two_children() {
        let mut tree = build(&[50, 30, 70, 20, 40, 60, 80, 65]);

        assert!(tree.remove(20));
        assert!(tree.remove(60));
        assert!(tree.remove(50));
        assert!(!tree.remove(999));

        assert_eq!(tree.values(Order::InOrder), vec![30, 40, 65, 70, 80]);
        assert_eq!(tree.value(tree.root().unwrap()), 65);
        assert!(tree.is_ordered());
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut tree = build(&[2, 1, 3]);
        tree.remove(1);
        let id = tree.alloc(10);
        assert!(id < 3);
    }

    #[test]
    fn test_search_path() {
        let tree = build(&[8, 4, 12, 6]);
        let (path, found) = tree.search_path(6);
        let values: Vec<i32> = path.iter().map(|&id| tree.value(id)).collect();
        assert_eq!(values, vec![8, 4, 6]);
        assert!(found.is_some());
        assert!(tree.search_path(5).1.is_none());
    }

    #[test]
    fn test_heights() {
        let tree = build(&[3, 2, 1]);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.balance(tree.root()), 2);
    }
}
