//! Fixed-capacity circular queue
//!
//! Slots live in a `Vec<Option<i32>>`; `front` and `rear` index into it with
//! modular arithmetic. `front == None` is the only encoding of "empty", and
//! `(rear + 1) % capacity == front` is the only encoding of "full". The two
//! never hold at once: an empty queue has no `front` to compare against.

use super::StructureError;
use crate::run::constants::{
    DEFAULT_CIRCULAR_CAPACITY, MAX_CIRCULAR_CAPACITY, MIN_CIRCULAR_CAPACITY,
};

#[derive(Debug, Clone)]
pub struct CircularQueue {
    slots: Vec<Option<i32>>,
    front: Option<usize>,
    rear: Option<usize>,
}

impl CircularQueue {
    /// Create an empty queue, clamping `capacity` into the supported range
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(MIN_CIRCULAR_CAPACITY, MAX_CIRCULAR_CAPACITY);
        CircularQueue {
            slots: vec![None; capacity],
            front: None,
            rear: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    pub fn is_full(&self) -> bool {
        match (self.front, self.rear) {
            (Some(front), Some(rear)) => (rear + 1) % self.capacity() == front,
            _ => false,
        }
    }

    /// Slot the next enqueue will write to, if there is room
    pub fn next_rear(&self) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        Some(match self.rear {
            Some(rear) => (rear + 1) % self.capacity(),
            None => 0,
        })
    }

    /// Store `value` at the new rear and return its slot
    pub fn enqueue(&mut self, value: i32) -> Result<usize, StructureError> {
        if self.is_full() {
            return Err(StructureError::Full {
                structure: "Circular Queue",
                capacity: self.capacity(),
            });
        }
        if self.front.is_none() {
            self.front = Some(0);
        }
        let rear = match self.rear {
            Some(rear) => (rear + 1) % self.capacity(),
            None => 0,
        };
        self.rear = Some(rear);
        self.slots[rear] = Some(value);
        Ok(rear)
    }

    /// Remove the front value, returning it with the slot it occupied
    pub fn dequeue(&mut self) -> Result<(i32, usize), StructureError> {
        let (front, rear) = match (self.front, self.rear) {
            (Some(front), Some(rear)) => (front, rear),
            _ => {
                return Err(StructureError::Empty {
                    structure: "Circular Queue",
                })
            }
        };
        let value = self.slots[front].take().ok_or(StructureError::Empty {
            structure: "Circular Queue",
        })?;
        if front == rear {
            self.front = None;
            self.rear = None;
        } else {
            self.front = Some((front + 1) % self.capacity());
        }
        Ok((value, front))
    }

    pub fn peek_front(&self) -> Option<(i32, usize)> {
        let front = self.front?;
        self.slots[front].map(|v| (v, front))
    }

    pub fn peek_rear(&self) -> Option<(i32, usize)> {
        let rear = self.rear?;
        self.slots[rear].map(|v| (v, rear))
    }

    /// Number of stored values, accounting for wrap-around
    pub fn count(&self) -> usize {
        match (self.front, self.rear) {
            (Some(front), Some(rear)) if rear >= front => rear - front + 1,
            (Some(front), Some(rear)) => self.capacity() - front + rear + 1,
            _ => 0,
        }
    }

    pub fn free_space(&self) -> usize {
        self.capacity() - self.count()
    }

    pub fn front(&self) -> Option<usize> {
        self.front
    }

    pub fn rear(&self) -> Option<usize> {
        self.rear
    }

    pub fn slots(&self) -> &[Option<i32>] {
        &self.slots
    }

    /// Occupied slot indices from front to rear
    pub fn occupied(&self) -> Vec<usize> {
        let Some(front) = self.front else {
            return Vec::new();
        };
        (0..self.count())
            .map(|offset| (front + offset) % self.capacity())
            .collect()
    }

    /// Stored values from front to rear
    pub fn values(&self) -> Vec<i32> {
        self.occupied()
            .into_iter()
            .filter_map(|slot| self.slots[slot])
            .collect()
    }

    pub fn state_label(&self) -> &'static str {
        if self.is_empty() {
            "Empty"
        } else if self.is_full() {
            "Full"
        } else {
            "Partially Full"
        }
    }

    /// Drop all values, keeping the capacity
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.front = None;
        self.rear = None;
    }
}

impl Default for CircularQueue {
    fn default() -> Self {
        Self::new(DEFAULT_CIRCULAR_CAPACITY)
    }
}

/// Render an optional index the way the pointer display shows it
pub fn index_label(index: Option<usize>) -> String {
    match index {
        Some(i) => i.to_string(),
        None => "-1".to_string(),
    }
}
