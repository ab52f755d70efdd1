use super::StructureError;
use crate::run::constants::LINEAR_CAPACITY;
use std::collections::VecDeque;

/// Bounded FIFO queue
#[derive(Debug, Clone)]
pub struct Queue {
    items: VecDeque<String>,
    capacity: usize,
}

impl Queue {
    pub fn new() -> Self {
        Self::with_capacity(LINEAR_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Queue {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn enqueue(&mut self, value: String) -> Result<(), StructureError> {
        if self.items.len() >= self.capacity {
            return Err(StructureError::Full {
                structure: "Queue",
                capacity: self.capacity,
            });
        }
        self.items.push_back(value);
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<String, StructureError> {
        self.items
            .pop_front()
            .ok_or(StructureError::Empty { structure: "Queue" })
    }

    pub fn front(&self) -> Result<&str, StructureError> {
        self.items
            .front()
            .map(String::as_str)
            .ok_or(StructureError::Empty { structure: "Queue" })
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

    /// Items from front to rear
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}
