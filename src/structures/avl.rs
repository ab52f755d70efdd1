//! AVL rotations and rebalancing
//!
//! Operates on a [`Tree`] whose heights are maintained on every mutation.
//! Insert-time and delete-time rebalancing pick the rotation case
//! differently:
//!
//! - after an insert, the case is chosen by comparing the inserted value with
//!   the heavy child's value (the new leaf sits below that child);
//! - after a delete, the removed value says nothing about the shape below,
//!   so the case is chosen from the heavy child's own balance factor.
//!
//! Both are the standard algorithm. Do not unify them.

use super::tree::{NodeId, Tree};
use std::fmt;

/// A rebalancing applied at one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Left-left heavy: single right rotation
    LeftLeft,
    /// Right-right heavy: single left rotation
    RightRight,
    /// Left-right heavy: left rotation of the left child, then right rotation
    LeftRight,
    /// Right-left heavy: right rotation of the right child, then left rotation
    RightLeft,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::LeftLeft,
        Rotation::RightRight,
        Rotation::LeftRight,
        Rotation::RightLeft,
    ];

    /// Number of single rotations performed
    pub fn count(&self) -> u64 {
        match self {
            Rotation::LeftLeft | Rotation::RightRight => 1,
            Rotation::LeftRight | Rotation::RightLeft => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rotation::LeftLeft => "Right Rotation",
            Rotation::RightRight => "Left Rotation",
            Rotation::LeftRight => "Left-Right Rotation",
            Rotation::RightLeft => "Right-Left Rotation",
        }
    }

    pub fn case(&self) -> &'static str {
        match self {
            Rotation::LeftLeft => "LL",
            Rotation::RightRight => "RR",
            Rotation::LeftRight => "LR",
            Rotation::RightLeft => "RL",
        }
    }

    /// When this case applies
    pub fn explanation(&self) -> &'static str {
        match self {
            Rotation::LeftLeft => "Right Rotation (LL Case): When left subtree is too heavy",
            Rotation::RightRight => "Left Rotation (RR Case): When right subtree is too heavy",
            Rotation::LeftRight => {
                "Left-Right Rotation (LR Case): Left child's right subtree heavy"
            }
            Rotation::RightLeft => {
                "Right-Left Rotation (RL Case): Right child's left subtree heavy"
            }
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} Case)", self.name(), self.case())
    }
}

/// Rotate the subtree at `x` left; returns the new subtree root
pub fn rotate_left(tree: &mut Tree, x: NodeId) -> NodeId {
    let Some(y) = tree.node(x).right else {
        return x;
    };
    let middle = tree.node(y).left;

    tree.node_mut(y).left = Some(x);
    tree.node_mut(x).right = middle;

    tree.update_height(x);
    tree.update_height(y);
    y
}

/// Rotate the subtree at `y` right; returns the new subtree root
pub fn rotate_right(tree: &mut Tree, y: NodeId) -> NodeId {
    let Some(x) = tree.node(y).left else {
        return y;
    };
    let middle = tree.node(x).right;

    tree.node_mut(x).right = Some(y);
    tree.node_mut(y).left = middle;

    tree.update_height(y);
    tree.update_height(x);
    x
}

fn apply(tree: &mut Tree, id: NodeId, rotation: Rotation) -> NodeId {
    match rotation {
        Rotation::LeftLeft => rotate_right(tree, id),
        Rotation::RightRight => rotate_left(tree, id),
        Rotation::LeftRight => {
            if let Some(left) = tree.node(id).left {
                let left = rotate_left(tree, left);
                tree.node_mut(id).left = Some(left);
            }
            rotate_right(tree, id)
        }
        Rotation::RightLeft => {
            if let Some(right) = tree.node(id).right {
                let right = rotate_right(tree, right);
                tree.node_mut(id).right = Some(right);
            }
            rotate_left(tree, id)
        }
    }
}

/// Refresh `id`'s height and restore balance after `value` was inserted
/// somewhere below it. Returns the subtree's new root and the case applied.
pub fn rebalance_after_insert(
    tree: &mut Tree,
    id: NodeId,
    value: i32,
) -> (NodeId, Option<Rotation>) {
    tree.update_height(id);
    let balance = tree.balance(Some(id));
    let node = tree.node(id);
    let left_value = node.left.map(|l| tree.value(l));
    let right_value = node.right.map(|r| tree.value(r));

    let rotation = match (left_value, right_value) {
        (Some(left), _) if balance > 1 && value < left => Some(Rotation::LeftLeft),
        (_, Some(right)) if balance < -1 && value > right => Some(Rotation::RightRight),
        (Some(left), _) if balance > 1 && value > left => Some(Rotation::LeftRight),
        (_, Some(right)) if balance < -1 && value < right => Some(Rotation::RightLeft),
        _ => None,
    };

    match rotation {
        Some(rotation) => (apply(tree, id, rotation), Some(rotation)),
        None => (id, None),
    }
}

/// Refresh `id`'s height and restore balance after a deletion below it.
///
/// The case comes from the heavy child's current balance, not from the
/// deleted value.
pub fn rebalance_after_delete(tree: &mut Tree, id: NodeId) -> (NodeId, Option<Rotation>) {
    tree.update_height(id);
    let balance = tree.balance(Some(id));
    let node = tree.node(id);
    let left_balance = tree.balance(node.left);
    let right_balance = tree.balance(node.right);

    let rotation = if balance > 1 && left_balance >= 0 {
        Some(Rotation::LeftLeft)
    } else if balance > 1 {
        Some(Rotation::LeftRight)
    } else if balance < -1 && right_balance <= 0 {
        Some(Rotation::RightRight)
    } else if balance < -1 {
        Some(Rotation::RightLeft)
    } else {
        None
    };

    match rotation {
        Some(rotation) => (apply(tree, id, rotation), Some(rotation)),
        None => (id, None),
    }
}

/// Delete `value` and rebalance on the way back up.
///
/// Returns whether a node was removed and the rotations applied, innermost
/// first.
pub fn remove(tree: &mut Tree, value: i32) -> (bool, Vec<Rotation>) {
    let mut rotations = Vec::new();
    let (root, removed) = remove_from(tree, tree.root(), value, &mut rotations);
    tree.set_root(root);
    (removed, rotations)
}

fn remove_from(
    tree: &mut Tree,
    link: Option<NodeId>,
    value: i32,
    rotations: &mut Vec<Rotation>,
) -> (Option<NodeId>, bool) {
    let Some(id) = link else {
        return (None, false);
    };
    let node = tree.node(id).clone();
    let removed = if value < node.value {
        let (left, removed) = remove_from(tree, node.left, value, rotations);
        tree.node_mut(id).left = left;
        removed
    } else if value > node.value {
        let (right, removed) = remove_from(tree, node.right, value, rotations);
        tree.node_mut(id).right = right;
        removed
    } else {
        match (node.left, node.right) {
            (None, child) | (child, None) => {
                tree.release(id);
                return (child, true);
            }
            (Some(_), Some(right)) => {
                let successor = tree.value(tree.find_min(right));
                tree.node_mut(id).value = successor;
                let (right, _) = remove_from(tree, Some(right), successor, rotations);
                tree.node_mut(id).right = right;
                true
            }
        }
    };

    let (id, rotation) = rebalance_after_delete(tree, id);
    rotations.extend(rotation);
    (Some(id), removed)
}

/// Every node's balance factor, in pre-order
pub fn balance_report(tree: &Tree) -> Vec<(i32, i32)> {
    tree.traverse(super::tree::Order::PreOrder)
        .into_iter()
        .map(|id| (tree.value(id), tree.balance(Some(id))))
        .collect()
}

/// Whether every node satisfies the AVL height and balance invariants
pub fn is_balanced(tree: &Tree) -> bool {
    tree.traverse(super::tree::Order::PostOrder)
        .into_iter()
        .all(|id| {
            let node = tree.node(id);
            let expected = 1 + tree.height(node.left).max(tree.height(node.right));
            node.height == expected && tree.balance(Some(id)).abs() <= 1
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::tree::Order;

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
        } else {
            return id;
        }
        rebalance_after_insert(tree, id, value).0
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
    fn test_each_insert_case() {
        // LL, RR, LR, RL each collapse to root 2 with children 1 and 3
        for values in [[3, 2, 1], [1, 2, 3], [3, 1, 2], [1, 3, 2]] {
            let tree = build(&values);
            assert_eq!(tree.values(Order::PreOrder), vec![2, 1, 3], "{:?}", values);
            assert!(is_balanced(&tree));
        }
    }

    #[test]
    fn test_rotation_updates_heights() {
        let mut tree = build(&[1, 2]);
        let root = tree.root().unwrap();
        let new_root = rotate_left(&mut tree, root);
        tree.set_root(Some(new_root));
        assert_eq!(tree.value(new_root), 2);
        assert_eq!(tree.node(new_root).height, 2);
        assert_eq!(tree.node(root).height, 1);
    }

    #[test]
    fn test_delete_uses_child_balance() {
        let mut tree = build(&[3, 2, 4, 1, 5]);

        let (removed, rotations) = remove(&mut tree, 5);
        assert!(removed);
        assert!(rotations.is_empty());

        // Root 3 is now left-heavy with a left-leaning child. Choosing by the
        // deleted value (4 > 2) would wrongly pick LR.
        let (removed, rotations) = remove(&mut tree, 4);
        assert!(removed);
        assert_eq!(rotations, vec![Rotation::LeftLeft]);
        assert_eq!(tree.values(Order::PreOrder), vec![2, 1, 3]);
        assert!(is_balanced(&tree));
    }

    #[test]
    fn test_delete_left_right_case() {
        let mut tree = build(&[5, 2, 8, 3]);
        let (_, rotations) = remove(&mut tree, 8);
        assert_eq!(rotations, vec![Rotation::LeftRight]);
        assert_eq!(tree.values(Order::PreOrder), vec![3, 2, 5]);
        assert!(is_balanced(&tree));
    }

    #[test]
    fn test_balance_report_preorder() {
        let tree = build(&[2, 1, 3, 4]);
        assert_eq!(balance_report(&tree), vec![(2, -1), (1, 0), (3, -1), (4, 0)]);
    }
}
