use super::StructureError;
use crate::run::constants::LINEAR_CAPACITY;

/// Bounded LIFO stack
#[derive(Debug, Clone)]
pub struct Stack {
    items: Vec<String>,
    capacity: usize,
}

impl Stack {
    pub fn new() -> Self {
        Self::with_capacity(LINEAR_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: String) -> Result<(), StructureError> {
        if self.items.len() >= self.capacity {
            return Err(StructureError::Full {
                structure: "Stack",
                capacity: self.capacity,
            });
        }
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<String, StructureError> {
        self.items
            .pop()
            .ok_or(StructureError::Empty { structure: "Stack" })
    }

    pub fn peek(&self) -> Result<&str, StructureError> {
        self.items
            .last()
            .map(String::as_str)
            .ok_or(StructureError::Empty { structure: "Stack" })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Items from bottom to top
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut stack = Stack::new();
        stack.push("a".to_string()).unwrap();
        stack.push("b".to_string()).unwrap();
        assert_eq!(stack.peek().unwrap(), "b");
        assert_eq!(stack.pop().unwrap(), "b");
        assert_eq!(stack.pop().unwrap(), "a");
        assert!(stack.pop().is_err());
    }

    #[test]
    fn test_overflow_leaves_stack_intact() {
        let mut stack = Stack::new();
        for i in 0..LINEAR_CAPACITY {
            stack.push(i.to_string()).unwrap();
        }
        let err = stack.push("overflow".to_string()).unwrap_err();
        assert_eq!(
            err,
            StructureError::Full {
                structure: "Stack",
                capacity: 10
            }
        );
        assert_eq!(stack.len(), LINEAR_CAPACITY);
        assert_eq!(stack.peek().unwrap(), "9");
    }

    #[test]
    fn test_peek_empty() {
        let stack = Stack::new();
        assert_eq!(
            stack.peek().unwrap_err().to_string(),
            "Stack is empty!"
        );
    }
}
