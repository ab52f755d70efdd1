// Snapshot of everything the renderer may paint

use crate::run::{Stats, StepLog};
use crate::structures::{
    circular::CircularQueue, linked_list::LinkedList, queue::Queue, stack::Stack, tree::Tree,
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::Duration;

/// Which structure the main pane shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Array,
    Stack,
    Queue,
    LinkedList,
    CircularQueue,
    Bst,
    Avl,
}

impl Panel {
    pub const ALL: [Panel; 7] = [
        Panel::Array,
        Panel::Stack,
        Panel::Queue,
        Panel::LinkedList,
        Panel::CircularQueue,
        Panel::Bst,
        Panel::Avl,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Panel::Array => "Array",
            Panel::Stack => "Stack",
            Panel::Queue => "Queue",
            Panel::LinkedList => "Linked List",
            Panel::CircularQueue => "Circular Queue",
            Panel::Bst => "Binary Search Tree",
            Panel::Avl => "AVL Tree",
        }
    }

    /// Cycle to the next panel
    pub fn next(self) -> Self {
        let index = Panel::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Panel::ALL[(index + 1) % Panel::ALL.len()]
    }

    /// Cycle to the previous panel
    pub fn prev(self) -> Self {
        let index = Panel::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Panel::ALL[(index + Panel::ALL.len() - 1) % Panel::ALL.len()]
    }
}

/// Visual role of a highlighted index or tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Active,
    Comparing,
    Sorted,
    Swapping,
    Found,
    Visiting,
    Visited,
    Front,
    Rear,
    Enqueue,
    Dequeue,
    Occupied,
}

/// Role-tagged highlight sets.
///
/// Indices are array/slot positions for linear panels and [`NodeId`]s for
/// tree panels. One index may carry several roles at once.
///
/// [`NodeId`]: crate::structures::tree::NodeId
#[derive(Debug, Clone, Default)]
pub struct Marks {
    roles: FxHashMap<Role, FxHashSet<usize>>,
}

impl Marks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.roles.clear();
    }

    pub fn set(&mut self, role: Role, indices: impl IntoIterator<Item = usize>) {
        let entry = self.roles.entry(role).or_default();
        entry.clear();
        entry.extend(indices);
    }

    pub fn add(&mut self, role: Role, index: usize) {
        self.roles.entry(role).or_default().insert(index);
    }

    pub fn remove(&mut self, role: Role, index: usize) {
        if let Some(set) = self.roles.get_mut(&role) {
            set.remove(&index);
        }
    }

    pub fn has(&self, role: Role, index: usize) -> bool {
        self.roles.get(&role).is_some_and(|set| set.contains(&index))
    }

    /// Roles of `index`, strongest first
    pub fn roles_of(&self, index: usize) -> impl Iterator<Item = Role> + '_ {
        const PRIORITY: [Role; 12] = [
            Role::Swapping,
            Role::Found,
            Role::Comparing,
            Role::Visiting,
            Role::Active,
            Role::Enqueue,
            Role::Dequeue,
            Role::Front,
            Role::Rear,
            Role::Visited,
            Role::Occupied,
            Role::Sorted,
        ];
        PRIORITY
            .into_iter()
            .filter(move |&role| self.has(role, index))
    }

    pub fn is_empty(&self) -> bool {
        self.roles.values().all(|set| set.is_empty())
    }
}

/// Tone of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Error,
}

/// One-line user-visible status message
#[derive(Debug, Clone)]
pub struct Status {
    pub message: String,
    pub level: Level,
}

impl Status {
    pub fn new(message: impl Into<String>, level: Level) -> Self {
        Status {
            message: message.into(),
            level,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::new("Ready!", Level::Info)
    }
}

/// Borrowed view of the session handed to a renderer
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub panel: Panel,
    /// Array as currently shown, which is a sort's private copy mid-run
    pub canvas: &'a [i32],
    pub stack: &'a Stack,
    pub queue: &'a Queue,
    pub list: &'a LinkedList,
    pub circular: &'a CircularQueue,
    pub bst: &'a Tree,
    pub avl: &'a Tree,
    pub marks: &'a Marks,
    pub steps: &'a StepLog,
    pub stats: &'a Stats,
    pub status: &'a Status,
    pub listing: &'static str,
    pub animating: bool,
    pub paused: bool,
    pub speed: Duration,
}

impl Snapshot<'_> {
    /// Tree shown by a tree panel
    pub fn tree(&self) -> Option<&Tree> {
        match self.panel {
            Panel::Bst => Some(self.bst),
            Panel::Avl => Some(self.avl),
            _ => None,
        }
    }
}
