//! Reference listings shown in the code pane
//!
//! One short listing per algorithm and structure. The code pane only
//! displays them; nothing here is executed.

use crate::command::{SearchKind, SortKind};
use crate::snapshot::Panel;

pub const BUBBLE_SORT: &str = "\
fn bubble_sort(arr: &mut [i32]) {
    let n = arr.len();
    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
}";

pub const SELECTION_SORT: &str = "\
fn selection_sort(arr: &mut [i32]) {
    let n = arr.len();
    for i in 0..n - 1 {
        let mut min = i;
        for j in i + 1..n {
            if arr[j] < arr[min] {
                min = j;
            }
        }
        if min != i {
            arr.swap(i, min);
        }
    }
}";

pub const INSERTION_SORT: &str = "\
fn insertion_sort(arr: &mut [i32]) {
    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        while j > 0 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;
    }
}";

pub const LINEAR_SEARCH: &str = "\
fn linear_search(arr: &[i32], target: i32) -> Option<usize> {
    for (i, &value) in arr.iter().enumerate() {
        if value == target {
            return Some(i);
        }
    }
    None
}";

pub const BINARY_SEARCH: &str = "\
fn binary_search(arr: &[i32], target: i32) -> Option<usize> {
    let (mut left, mut right) = (0i64, arr.len() as i64 - 1);
    while left <= right {
        let mid = (left + right) / 2;
        match arr[mid as usize].cmp(&target) {
            Equal => return Some(mid as usize),
            Less => left = mid + 1,
            Greater => right = mid - 1,
        }
    }
    None
}";

pub const STACK: &str = "\
push(v):  if len == 10 -> overflow
          items.push(v)
pop():    if empty -> underflow
          items.pop()
peek():   items.last()";

pub const QUEUE: &str = "\
enqueue(v): if len == 10 -> overflow
            items.push_back(v)
dequeue():  if empty -> underflow
            items.pop_front()
front():    items.front()";

pub const LINKED_LIST: &str = "\
add(v):        walk to tail, link new node
add_first(v):  new node -> old head
remove(v):     unlink first node == v
search(v):     walk, count index until == v";

pub const CIRCULAR_QUEUE: &str = "\
is_empty():  front == -1
is_full():   (rear + 1) % cap == front
enqueue(v):  if full -> overflow
             if empty { front = 0 }
             rear = (rear + 1) % cap
             slots[rear] = v
dequeue():   if empty -> underflow
             v = slots[front]
             if front == rear { front = rear = -1 }
             else { front = (front + 1) % cap }";

pub const BST: &str = "\
fn insert(node, v) -> Node {
    match node {
        None => Node::leaf(v),
        Some(n) if v < n.value => n.left = insert(n.left, v),
        Some(n) if v > n.value => n.right = insert(n.right, v),
        Some(n) => n, // duplicate
    }
}";

pub const AVL: &str = "\
fn insert(node, v) -> Node {
    /* BST insert, then: */
    node.height = 1 + max(h(left), h(right));
    let bf = h(left) - h(right);
    if bf > 1 && v < left.value  { return rotate_right(node) }  // LL
    if bf < -1 && v > right.value { return rotate_left(node) }  // RR
    if bf > 1 && v > left.value  { left = rotate_left(left);
                                   return rotate_right(node) }  // LR
    if bf < -1 && v < right.value { right = rotate_right(right);
                                   return rotate_left(node) }   // RL
    node
}";

pub fn for_sort(kind: SortKind) -> &'static str {
    match kind {
        SortKind::Bubble => BUBBLE_SORT,
        SortKind::Selection => SELECTION_SORT,
        SortKind::Insertion => INSERTION_SORT,
    }
}

pub fn for_search(kind: SearchKind) -> &'static str {
    match kind {
        SearchKind::Linear => LINEAR_SEARCH,
        SearchKind::Binary => BINARY_SEARCH,
    }
}

/// Default listing when a panel is opened
pub fn for_panel(panel: Panel) -> &'static str {
    match panel {
        Panel::Array => BUBBLE_SORT,
        Panel::Stack => STACK,
        Panel::Queue => QUEUE,
        Panel::LinkedList => LINKED_LIST,
        Panel::CircularQueue => CIRCULAR_QUEUE,
        Panel::Bst => BST,
        Panel::Avl => AVL,
    }
}
