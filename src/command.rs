//! Command language
//!
//! Every user action is a line of text parsed into a [`Command`]. Parsing
//! validates all numeric input up front, so a malformed command is rejected
//! before it can start a run or touch any structure.
//!
//! ```text
//! sort bubble            search binary 42       bst insert 5,3,8
//! push hello             list add-first x       cq init 5
//! ```

use crate::run::constants::{MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use crate::session::errors::CommandError;
use crate::snapshot::Panel;
use crate::structures::tree::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Bubble,
    Selection,
    Insertion,
}

impl SortKind {
    pub fn name(self) -> &'static str {
        match self {
            SortKind::Bubble => "Bubble Sort",
            SortKind::Selection => "Selection Sort",
            SortKind::Insertion => "Insertion Sort",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Linear,
    Binary,
}

impl SearchKind {
    pub fn name(self) -> &'static str {
        match self {
            SearchKind::Linear => "Linear Search",
            SearchKind::Binary => "Binary Search",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    Bst,
    Avl,
}

impl TreeKind {
    pub fn name(self) -> &'static str {
        match self {
            TreeKind::Bst => "BST",
            TreeKind::Avl => "AVL Tree",
        }
    }

    pub fn panel(self) -> Panel {
        match self {
            TreeKind::Bst => Panel::Bst,
            TreeKind::Avl => Panel::Avl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Array and run control
    Generate(Option<usize>),
    Sort(SortKind),
    Search(SearchKind, i32),
    Stop,
    Resume,
    Reset,
    Speed(u64),
    Show(Panel),

    // Stack
    Push(String),
    Pop,
    Peek,

    // Linear queue
    Enqueue(String),
    Dequeue,
    Front,

    // Linked list
    ListAdd(String),
    ListAddFirst(String),
    ListRemove(String),
    ListRemoveFirst,
    ListRemoveLast,
    ListSearch(String),
    ListClear,

    // Circular queue
    CircularInit(Option<usize>),
    CircularEnqueue(i32),
    CircularDequeue,
    CircularPeekFront,
    CircularPeekRear,
    CircularCheckEmpty,
    CircularCheckFull,
    CircularShow,
    CircularReset,

    // Trees
    TreeInsert(TreeKind, Vec<i32>),
    TreeDelete(TreeKind, i32),
    TreeReset(TreeKind),
    BstSearch(i32),
    BstTraverse(Order),
    AvlCheckBalance,
    AvlCases,
}

impl Command {
    /// Whether this command starts an animated run
    pub fn is_animated(&self) -> bool {
        matches!(
            self,
            Command::Sort(_)
                | Command::Search(..)
                | Command::TreeInsert(..)
                | Command::BstSearch(_)
                | Command::BstTraverse(_)
        )
    }

    /// Parse one command line
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let input = input.trim();
        let mut words = input.split_whitespace();
        let head = words
            .next()
            .ok_or(CommandError::MissingValue)?
            .to_ascii_lowercase();
        let rest = input[head.len()..].trim();

        match head.as_str() {
            "new" | "generate" => {
                if rest.is_empty() {
                    return Ok(Command::Generate(None));
                }
                let size = parse_number(rest)?;
                let size = usize::try_from(size)
                    .ok()
                    .filter(|s| (MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(s))
                    .ok_or(CommandError::ArraySizeOutOfRange { size: size as i64 })?;
                Ok(Command::Generate(Some(size)))
            }
            "sort" => match rest.to_ascii_lowercase().as_str() {
                "bubble" => Ok(Command::Sort(SortKind::Bubble)),
                "selection" => Ok(Command::Sort(SortKind::Selection)),
                "insertion" => Ok(Command::Sort(SortKind::Insertion)),
                _ => Err(missing("sort", "bubble, selection or insertion")),
            },
            "search" => {
                let (kind, target) = split_first(rest);
                let kind = match kind.to_ascii_lowercase().as_str() {
                    "linear" => SearchKind::Linear,
                    "binary" => SearchKind::Binary,
                    _ => return Err(missing("search", "linear or binary and a target")),
                };
                Ok(Command::Search(kind, parse_required(target)?))
            }
            "stop" | "pause" => Ok(Command::Stop),
            "resume" => Ok(Command::Resume),
            "reset" => Ok(Command::Reset),
            "speed" => {
                let ms = parse_required(rest)?;
                let ms = u64::try_from(ms).map_err(|_| CommandError::InvalidNumber {
                    input: rest.to_string(),
                })?;
                Ok(Command::Speed(ms))
            }
            "show" | "view" => parse_panel(rest).map(Command::Show),

            "push" => required_text(rest).map(Command::Push),
            "pop" => Ok(Command::Pop),
            "peek" => Ok(Command::Peek),

            "enqueue" => required_text(rest).map(Command::Enqueue),
            "dequeue" => Ok(Command::Dequeue),
            "front" => Ok(Command::Front),

            "list" => parse_list(rest),
            "cq" | "circular" => parse_circular(rest),
            "bst" => parse_tree(TreeKind::Bst, rest),
            "avl" => parse_tree(TreeKind::Avl, rest),

            _ => Err(CommandError::UnknownCommand {
                input: input.to_string(),
            }),
        }
    }
}

fn parse_list(rest: &str) -> Result<Command, CommandError> {
    let (action, value) = split_first(rest);
    match action.to_ascii_lowercase().as_str() {
        "add" => required_text(value).map(Command::ListAdd),
        "add-first" | "addfirst" => required_text(value).map(Command::ListAddFirst),
        "remove" => required_text(value).map(Command::ListRemove),
        "remove-first" | "removefirst" => Ok(Command::ListRemoveFirst),
        "remove-last" | "removelast" => Ok(Command::ListRemoveLast),
        "search" => required_text(value).map(Command::ListSearch),
        "clear" => Ok(Command::ListClear),
        _ => Err(missing(
            "list",
            "add, add-first, remove, remove-first, remove-last, search or clear",
        )),
    }
}

fn parse_circular(rest: &str) -> Result<Command, CommandError> {
    let (action, value) = split_first(rest);
    match action.to_ascii_lowercase().as_str() {
        "init" => {
            if value.is_empty() {
                return Ok(Command::CircularInit(None));
            }
            let capacity = parse_number(value)?;
            // Out-of-range capacities are clamped by the queue itself
            Ok(Command::CircularInit(Some(capacity.max(0) as usize)))
        }
        "enqueue" => parse_required(value).map(Command::CircularEnqueue),
        "dequeue" => Ok(Command::CircularDequeue),
        "front" => Ok(Command::CircularPeekFront),
        "rear" => Ok(Command::CircularPeekRear),
        "empty" => Ok(Command::CircularCheckEmpty),
        "full" => Ok(Command::CircularCheckFull),
        "show" | "display" => Ok(Command::CircularShow),
        "reset" => Ok(Command::CircularReset),
        _ => Err(missing(
            "cq",
            "init, enqueue, dequeue, front, rear, empty, full, show or reset",
        )),
    }
}

fn parse_tree(kind: TreeKind, rest: &str) -> Result<Command, CommandError> {
    let (action, value) = split_first(rest);
    match (kind, action.to_ascii_lowercase().as_str()) {
        (_, "insert") => parse_values(value).map(|values| Command::TreeInsert(kind, values)),
        (_, "delete") => parse_required(value).map(|v| Command::TreeDelete(kind, v)),
        (_, "reset") => Ok(Command::TreeReset(kind)),
        (TreeKind::Bst, "search") => parse_required(value).map(Command::BstSearch),
        (TreeKind::Bst, "traverse") => match value.to_ascii_lowercase().as_str() {
            "in" | "inorder" => Ok(Command::BstTraverse(Order::InOrder)),
            "pre" | "preorder" => Ok(Command::BstTraverse(Order::PreOrder)),
            "post" | "postorder" => Ok(Command::BstTraverse(Order::PostOrder)),
            _ => Err(missing("bst traverse", "in, pre or post")),
        },
        (TreeKind::Avl, "check") | (TreeKind::Avl, "balance") => Ok(Command::AvlCheckBalance),
        (TreeKind::Avl, "cases") | (TreeKind::Avl, "rotations") => Ok(Command::AvlCases),
        (TreeKind::Bst, _) => Err(missing("bst", "insert, delete, search, traverse or reset")),
        (TreeKind::Avl, _) => Err(missing("avl", "insert, delete, check, cases or reset")),
    }
}

fn parse_panel(name: &str) -> Result<Panel, CommandError> {
    match name.to_ascii_lowercase().as_str() {
        "array" => Ok(Panel::Array),
        "stack" => Ok(Panel::Stack),
        "queue" => Ok(Panel::Queue),
        "list" => Ok(Panel::LinkedList),
        "cq" | "circular" => Ok(Panel::CircularQueue),
        "bst" => Ok(Panel::Bst),
        "avl" => Ok(Panel::Avl),
        _ => Err(missing("show", "array, stack, queue, list, cq, bst or avl")),
    }
}

/// Split off the first word, returning it and the trimmed remainder
fn split_first(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (text, ""),
    }
}

fn missing(command: &str, expected: &str) -> CommandError {
    CommandError::MissingArgument {
        command: command.to_string(),
        expected: expected.to_string(),
    }
}

fn required_text(text: &str) -> Result<String, CommandError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CommandError::MissingValue);
    }
    Ok(text.to_string())
}

/// Parse a single integer
pub fn parse_number(text: &str) -> Result<i32, CommandError> {
    let text = text.trim();
    text.parse::<i32>().map_err(|_| CommandError::InvalidNumber {
        input: text.to_string(),
    })
}

fn parse_required(text: &str) -> Result<i32, CommandError> {
    if text.trim().is_empty() {
        return Err(CommandError::MissingValue);
    }
    parse_number(text)
}

/// Parse a comma-separated list of integers; any malformed entry rejects the
/// whole list
pub fn parse_values(text: &str) -> Result<Vec<i32>, CommandError> {
    let values = text
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_number)
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(CommandError::MissingValue);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sorts_and_searches() {
        assert_eq!(
            Command::parse("sort bubble").unwrap(),
            Command::Sort(SortKind::Bubble)
        );
        assert_eq!(
            Command::parse("  SEARCH binary 42 ").unwrap(),
            Command::Search(SearchKind::Binary, 42)
        );
        assert!(matches!(
            Command::parse("search linear abc"),
            Err(CommandError::InvalidNumber { .. })
        ));
        assert!(matches!(
            Command::parse("search linear"),
            Err(CommandError::MissingValue)
        ));
    }

    #[test]
    fn test_parse_array_size_bounds() {
        assert_eq!(Command::parse("new").unwrap(), Command::Generate(None));
        assert_eq!(Command::parse("new 20").unwrap(), Command::Generate(Some(20)));
        assert!(matches!(
            Command::parse("new 2"),
            Err(CommandError::ArraySizeOutOfRange { size: 2 })
        ));
        assert!(matches!(
            Command::parse("new -4"),
            Err(CommandError::ArraySizeOutOfRange { size: -4 })
        ));
    }

    #[test]
    fn test_parse_tree_values() {
        assert_eq!(
            Command::parse("bst insert 5, 3,8").unwrap(),
            Command::TreeInsert(TreeKind::Bst, vec![5, 3, 8])
        );
        assert!(matches!(
            Command::parse("avl insert 5,x,8"),
            Err(CommandError::InvalidNumber { ref input }) if input == "x"
        ));
        assert!(matches!(
            Command::parse("avl insert"),
            Err(CommandError::MissingValue)
        ));
        assert_eq!(
            Command::parse("bst traverse post").unwrap(),
            Command::BstTraverse(Order::PostOrder)
        );
        assert!(Command::parse("avl traverse in").is_err());
    }

    #[test]
    fn test_parse_text_values_keep_spaces() {
        assert_eq!(
            Command::parse("push hello world").unwrap(),
            Command::Push("hello world".to_string())
        );
        assert_eq!(
            Command::parse("list add-first  a b ").unwrap(),
            Command::ListAddFirst("a b".to_string())
        );
        assert!(matches!(
            Command::parse("enqueue   "),
            Err(CommandError::MissingValue)
        ));
    }

    #[test]
    fn test_parse_circular() {
        assert_eq!(Command::parse("cq init").unwrap(), Command::CircularInit(None));
        assert_eq!(
            Command::parse("cq init 5").unwrap(),
            Command::CircularInit(Some(5))
        );
        assert!(Command::parse("cq init five").is_err());
        assert_eq!(
            Command::parse("cq enqueue 7").unwrap(),
            Command::CircularEnqueue(7)
        );
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            Command::parse("frobnicate"),
            Err(CommandError::UnknownCommand { .. })
        ));
        assert!(matches!(Command::parse(""), Err(CommandError::MissingValue)));
    }
}
