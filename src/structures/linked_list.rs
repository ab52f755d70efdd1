//! Singly linked list
//!
//! The list owns its chain through `Option<Box<_>>` links; `head` is the only
//! entry point. `len` is kept in lock-step with the number of reachable nodes
//! and every mutating method re-checks that in debug builds.

use super::StructureError;

#[derive(Debug)]
struct ListNode {
    value: String,
    next: Option<Box<ListNode>>,
}

/// Singly linked list of strings
#[derive(Debug, Default)]
pub struct LinkedList {
    head: Option<Box<ListNode>>,
    len: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// Append at the tail
    pub fn add(&mut self, value: String) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(ListNode { value, next: None }));
        self.len += 1;
        self.debug_check();
    }

    /// Insert before the current head
    pub fn add_first(&mut self, value: String) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { value, next }));
        self.len += 1;
        self.debug_check();
    }

    /// Unlink the first node holding `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &str) -> bool {
        match self.search(value) {
            Some(index) => self.remove_at(index).is_some(),
            None => false,
        }
    }

    pub fn remove_first(&mut self) -> Result<String, StructureError> {
        self.remove_at(0).ok_or(StructureError::Empty {
            structure: "Linked List",
        })
    }

    pub fn remove_last(&mut self) -> Result<String, StructureError> {
        let last = self.len.checked_sub(1).ok_or(StructureError::Empty {
            structure: "Linked List",
        })?;
        self.remove_at(last).ok_or(StructureError::Empty {
            structure: "Linked List",
        })
    }

    /// Index of the first node holding `value`
    pub fn search(&self, value: &str) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn clear(&mut self) {
        self.drop_chain();
        self.len = 0;
    }

    fn remove_at(&mut self, index: usize) -> Option<String> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        let node = cursor.take()?;
        *cursor = node.next;
        self.len -= 1;
        self.debug_check();
        Some(node.value)
    }

    // Iterative teardown keeps long chains from recursing in Box's drop
    fn drop_chain(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.len, self.iter().count(), "list length out of sync");
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.drop_chain();
    }
}

/// Borrowing iterator from head to tail
pub struct Iter<'a> {
    next: Option<&'a ListNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value.as_str()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[&str]) -> LinkedList {
        let mut list = LinkedList::new();
        for v in values {
            list.add(v.to_string());
        }
        list
    }

    #[test]
    fn test_add_and_add_first() {
        let mut list = list_of(&["b", "c"]);
        list.add_first("a".to_string());
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_first_occurrence() {
        let mut list = list_of(&["a", "b", "a"]);
        assert!(list.remove("a"));
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["b", "a"]);
        assert!(!list.remove("z"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_ends() {
        let mut list = list_of(&["1", "2", "3"]);
        assert_eq!(list.remove_last().unwrap(), "3");
        assert_eq!(list.remove_first().unwrap(), "1");
        assert_eq!(list.remove_last().unwrap(), "2");
        assert!(list.is_empty());
        assert!(list.remove_last().is_err());
        assert!(list.remove_first().is_err());
    }

    #[test]
    fn test_search_index() {
        let list = list_of(&["x", "y", "z"]);
        assert_eq!(list.search("z"), Some(2));
        assert_eq!(list.search("w"), None);
    }

    #[test]
    fn test_clear_resets_len() {
        let mut list = list_of(&["1", "2"]);
        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.iter().next().is_none());
    }
}
