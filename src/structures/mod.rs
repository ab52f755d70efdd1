//! Data structures driven by the visualizer
//!
//! This module provides the synchronous structure engines:
//! - [`stack`]: bounded LIFO stack of strings
//! - [`queue`]: bounded FIFO queue of strings
//! - [`linked_list`]: singly linked list with an owned node chain
//! - [`circular`]: fixed-capacity ring buffer with front/rear indices
//! - [`tree`]: arena-backed binary tree shared by the BST and AVL engines
//! - [`avl`]: AVL rotations and rebalancing delete
//!
//! None of these suspend; animation is layered on top by
//! [`crate::algorithms`]. Full/empty checks never mutate state, so a
//! rejected operation leaves the structure exactly as it was.

pub mod avl;
pub mod circular;
pub mod linked_list;
pub mod queue;
pub mod stack;
pub mod tree;

use thiserror::Error;

/// Capacity errors raised by the bounded structures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// Push/enqueue on a structure already holding `capacity` items
    #[error("{structure} is full! Max size: {capacity}")]
    Full {
        structure: &'static str,
        capacity: usize,
    },

    /// Pop/dequeue/peek on an empty structure
    #[error("{structure} is empty!")]
    Empty { structure: &'static str },
}
