//! Animated tree engines
//!
//! Insert keeps native recursion over [`NodeId`]s; pausing inside it leaves
//! the recursion exactly where it was. Marks on tree panels are node ids.

use crate::command::TreeKind;
use crate::run::{Animated, Driver, RunToken};
use crate::session::Session;
use crate::snapshot::{Level, Role};
use crate::structures::avl;
use crate::structures::tree::{NodeId, Order};
use std::cmp::Ordering;

impl Session {
    /// Insert `values` in order, one suspension per visited node
    pub(crate) fn tree_insert(
        &mut self,
        driver: &mut dyn Driver,
        token: RunToken,
        kind: TreeKind,
        values: &[i32],
    ) -> Animated {
        let mut inserted = 0;
        for &value in values {
            let root = self.tree(kind).root();
            let (root, added) = self.insert_node(driver, token, kind, root, value)?;
            self.tree_mut(kind).set_root(Some(root));

            if added {
                inserted += 1;
                self.log(format!("Inserted: {value}"));
            } else {
                self.log(format!("{value} already present, ignored"));
            }
        }

        self.marks.clear();
        debug_assert!(self.tree(kind).is_ordered(), "tree order violated");
        debug_assert!(kind == TreeKind::Bst || avl::is_balanced(&self.avl));
        self.set_status(
            format!("Inserted {inserted} value(s) into {}", kind.name()),
            Level::Success,
        );
        Ok(())
    }

    /// Returns the subtree's new root and whether a node was added
    fn insert_node(
        &mut self,
        driver: &mut dyn Driver,
        token: RunToken,
        kind: TreeKind,
        link: Option<NodeId>,
        value: i32,
    ) -> Animated<(NodeId, bool)> {
        let Some(id) = link else {
            return Ok((self.tree_mut(kind).alloc(value), true));
        };

        let current = self.tree(kind).value(id);
        self.stats.compare();
        self.stats.pass();
        self.marks.add(Role::Visiting, id);
        let direction = match value.cmp(&current) {
            Ordering::Less => "go left",
            Ordering::Greater => "go right",
            Ordering::Equal => "duplicate",
        };
        self.log(format!("Visiting {current}: comparing with {value}, {direction}"));
        self.suspend(driver, token)?;

        let added = match value.cmp(&current) {
            Ordering::Less => {
                let left = self.tree(kind).node(id).left;
                let (left, added) = self.insert_node(driver, token, kind, left, value)?;
                self.tree_mut(kind).node_mut(id).left = Some(left);
                added
            }
            Ordering::Greater => {
                let right = self.tree(kind).node(id).right;
                let (right, added) = self.insert_node(driver, token, kind, right, value)?;
                self.tree_mut(kind).node_mut(id).right = Some(right);
                added
            }
            Ordering::Equal => false,
        };
        self.marks.remove(Role::Visiting, id);

        if !added {
            return Ok((id, false));
        }

        match kind {
            TreeKind::Bst => {
                self.bst.update_height(id);
                Ok((id, true))
            }
            TreeKind::Avl => {
                let (root, rotation) = avl::rebalance_after_insert(&mut self.avl, id, value);
                if let Some(rotation) = rotation {
                    self.stats.rotate(rotation.count());
                    self.log(format!("Performing {rotation}"));
                }
                Ok((root, true))
            }
        }
    }

    /// Descend from the root towards `value`, one suspension per node
    pub(crate) fn bst_search(
        &mut self,
        driver: &mut dyn Driver,
        token: RunToken,
        value: i32,
    ) -> Animated {
        self.log(format!("Searching for: {value}"));
        let mut current = self.bst.root();

        while let Some(id) = current {
            let node_value = self.bst.value(id);
            self.stats.compare();
            self.stats.pass();
            self.marks.set(Role::Visiting, [id]);
            self.log(format!("Comparing {value} with {node_value}"));
            self.suspend(driver, token)?;

            self.marks.remove(Role::Visiting, id);
            self.marks.add(Role::Visited, id);
            current = match value.cmp(&node_value) {
                Ordering::Less => self.bst.node(id).left,
                Ordering::Greater => self.bst.node(id).right,
                Ordering::Equal => {
                    self.marks.add(Role::Found, id);
                    self.log(format!("Found: {value}"));
                    self.set_status(format!("Found {value} in BST"), Level::Success);
                    return Ok(());
                }
            };
        }

        self.log(format!("{value} not found in BST"));
        self.set_status(format!("{value} not found in BST"), Level::Error);
        Ok(())
    }

    /// Log the full traversal, then highlight it node by node
    pub(crate) fn bst_traverse(
        &mut self,
        driver: &mut dyn Driver,
        token: RunToken,
        order: Order,
    ) -> Animated {
        if self.bst.is_empty() {
            self.log("Tree is empty");
            self.set_status("Tree is empty", Level::Info);
            return Ok(());
        }

        let ids = self.bst.traverse(order);
        let values: Vec<String> = ids
            .iter()
            .map(|&id| self.bst.value(id).to_string())
            .collect();
        self.log(format!("{order} Traversal: {}", values.join(" → ")));

        for id in ids {
            self.stats.pass();
            self.marks.add(Role::Visiting, id);
            self.suspend(driver, token)?;
            self.marks.remove(Role::Visiting, id);
            self.marks.add(Role::Visited, id);
        }

        self.set_status(format!("{order} traversal complete"), Level::Success);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::command::{Command, TreeKind};
    use crate::config::Config;
    use crate::run::Immediate;
    use crate::session::Session;
    use crate::snapshot::Role;
    use crate::structures::avl;
    use crate::structures::tree::Order;

    fn session() -> Session {
        Session::new(&Config::new(100, 5, 8, Some(3)))
    }

    #[test]
    fn test_avl_insert_scenario() {
        let mut session = session();
        session
            .execute(
                Command::TreeInsert(TreeKind::Avl, vec![5, 3, 8, 1, 4]),
                &mut Immediate,
            )
            .unwrap();

        let tree = session.avl();
        assert_eq!(tree.values(Order::InOrder), vec![1, 3, 4, 5, 8]);
        assert_eq!(tree.values(Order::PreOrder), vec![5, 3, 1, 4, 8]);
        assert!(avl::is_balanced(tree));
        assert_eq!(session.stats().rotations, 0);
    }

    #[test]
    fn test_avl_insert_counts_rotations() {
        let mut session = session();
        session
            .execute(Command::TreeInsert(TreeKind::Avl, vec![3, 1, 2]), &mut Immediate)
            .unwrap();

        assert_eq!(session.stats().rotations, 2);
        assert!(session
            .steps()
            .entries()
            .iter()
            .any(|s| s == "Performing Left-Right Rotation (LR Case)"));
        assert_eq!(session.avl().values(Order::PreOrder), vec![2, 1, 3]);
    }

    #[test]
    fn test_bst_insert_ignores_duplicates() {
        let mut session = session();
        session
            .execute(Command::TreeInsert(TreeKind::Bst, vec![5, 3, 5, 8]), &mut Immediate)
            .unwrap();

        assert_eq!(session.bst().values(Order::InOrder), vec![3, 5, 8]);
        // 0 + 1 + 1 (duplicate) + 1 visited nodes
        assert_eq!(session.stats().comparisons, 3);
        assert!(session.marks().is_empty());
    }

    #[test]
    fn test_bst_search_marks_found_node() {
        let mut session = session();
        session
            .execute(Command::TreeInsert(TreeKind::Bst, vec![5, 3, 8, 4]), &mut Immediate)
            .unwrap();
        session.execute(Command::BstSearch(4), &mut Immediate).unwrap();

        let found = session.bst().search_path(4).1.unwrap();
        assert!(session.marks().has(Role::Found, found));
        assert_eq!(session.stats().comparisons, 3);

        session.execute(Command::BstSearch(6), &mut Immediate).unwrap();
        assert_eq!(session.steps().last(), Some("6 not found in BST"));
    }

    #[test]
    fn test_traversal_logs_sequence() {
        let mut session = session();
        session
            .execute(Command::TreeInsert(TreeKind::Bst, vec![2, 1, 3]), &mut Immediate)
            .unwrap();
        session
            .execute(Command::BstTraverse(Order::PostOrder), &mut Immediate)
            .unwrap();

        assert_eq!(
            session.steps().entries()[0],
            "Post-order Traversal: 1 → 3 → 2"
        );
        assert_eq!(session.stats().passes, 3);
    }

    #[test]
    fn test_traverse_empty_tree() {
        let mut session = session();
        session
            .execute(Command::BstTraverse(Order::InOrder), &mut Immediate)
            .unwrap();

        assert_eq!(session.steps().entries(), ["Tree is empty"]);
        assert_eq!(session.stats().passes, 0);
        assert_eq!(session.status().message, "Tree is empty");
    }
}
