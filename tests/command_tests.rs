// Integration tests driving the session through typed command lines

mod common;

use algotty::config::Config;
use algotty::run::Immediate;
use algotty::session::errors::CommandError;
use algotty::session::Session;
use algotty::snapshot::{Level, Panel};
use algotty::structures::tree::Order;
use algotty::structures::StructureError;
use common::session_with;

fn run(session: &mut Session, lines: &[&str]) {
    for line in lines {
        session
            .execute_line(line, &mut Immediate)
            .unwrap_or_else(|err| panic!("'{line}' failed: {err}"));
    }
}

#[test]
fn test_sort_then_binary_search() {
    let mut session = session_with(&[5, 1, 4, 2, 8]);
    run(&mut session, &["sort bubble"]);

    assert_eq!(session.array(), &[1, 2, 4, 5, 8]);
    assert_eq!(session.stats().passes, 4);
    assert_eq!(
        session.steps().last(),
        Some("Bubble Sort completed! Array is sorted: [1, 2, 4, 5, 8]")
    );
    assert_eq!(session.status().level, Level::Success);

    run(&mut session, &["search binary 4"]);
    assert_eq!(session.status().message, "Found 4 at index 2");
    // A search starts a fresh run
    assert_eq!(session.stats().swaps, 0);
}

#[test]
fn test_generate_respects_bounds() {
    let mut session = Session::new(&common::config());
    run(&mut session, &["new 12"]);
    assert_eq!(session.array().len(), 12);
    assert!(session.array().iter().all(|v| (1..=100).contains(v)));

    let err = session.execute_line("new 2", &mut Immediate).unwrap_err();
    assert_eq!(err, CommandError::ArraySizeOutOfRange { size: 2 });
    assert_eq!(session.array().len(), 12);
    assert_eq!(session.status().level, Level::Error);
}

#[test]
fn test_seeded_sessions_match() {
    let config = Config::new(100, 10, 8, Some(42));
    let a = Session::new(&config);
    let b = Session::new(&config);
    assert_eq!(a.array(), b.array());
}

#[test]
fn test_malformed_numbers_change_nothing() {
    let mut session = session_with(&[3, 1, 2]);
    run(&mut session, &["bst insert 5,3,8"]);
    let steps_before = session.steps().len();

    for line in ["bst insert 4,x,9", "search linear abc", "cq enqueue 1.5", "speed fast"] {
        let err = session.execute_line(line, &mut Immediate).unwrap_err();
        assert!(matches!(err, CommandError::InvalidNumber { .. }), "{line}");
        assert_eq!(session.status().level, Level::Error);
    }

    assert_eq!(session.bst().values(Order::InOrder), vec![3, 5, 8]);
    assert_eq!(session.steps().len(), steps_before);
    assert_eq!(session.array(), &[3, 1, 2]);
}

#[test]
fn test_unknown_and_incomplete_commands() {
    let mut session = session_with(&[3, 1, 2]);
    assert!(matches!(
        session.execute_line("frobnicate", &mut Immediate),
        Err(CommandError::UnknownCommand { .. })
    ));
    assert!(matches!(
        session.execute_line("sort quick", &mut Immediate),
        Err(CommandError::MissingArgument { .. })
    ));
    assert_eq!(
        session.execute_line("push", &mut Immediate),
        Err(CommandError::MissingValue)
    );
}

#[test]
fn test_stack_and_queue_flow() {
    let mut session = session_with(&[3, 1, 2]);
    run(
        &mut session,
        &["push a", "push b", "pop", "enqueue x", "enqueue y", "dequeue"],
    );

    assert_eq!(session.stack().items(), &["a".to_string()]);
    assert_eq!(session.queue().iter().collect::<Vec<_>>(), vec!["y"]);
    assert_eq!(session.panel(), Panel::Queue);
    assert_eq!(session.status().message, "Dequeued x from queue. Queue size: 1");

    run(&mut session, &["pop"]);
    let err = session.execute_line("pop", &mut Immediate).unwrap_err();
    assert_eq!(
        err,
        CommandError::Structure(StructureError::Empty { structure: "Stack" })
    );
}

#[test]
fn test_linked_list_flow() {
    let mut session = session_with(&[3, 1, 2]);
    run(
        &mut session,
        &[
            "list add b",
            "list add c",
            "list add-first a",
            "list remove b",
            "list search c",
        ],
    );

    assert_eq!(session.list().iter().collect::<Vec<_>>(), vec!["a", "c"]);
    assert_eq!(session.status().message, "Found c at index 1");

    assert!(matches!(
        session.execute_line("list remove zzz", &mut Immediate),
        Err(CommandError::NotFound { .. })
    ));
    run(&mut session, &["list remove-last", "list remove-first"]);
    assert!(session.list().is_empty());
}

#[test]
fn test_circular_queue_capacity_three() {
    let mut session = session_with(&[3, 1, 2]);
    run(
        &mut session,
        &[
            "cq init 3",
            "cq enqueue 10",
            "cq enqueue 20",
            "cq enqueue 30",
        ],
    );
    assert!(session.circular().is_full());
    assert!(session.execute_line("cq enqueue 40", &mut Immediate).is_err());
    assert_eq!(
        session.steps().last(),
        Some("Queue Overflow! Cannot enqueue 40 - Queue is full")
    );

    run(&mut session, &["cq dequeue", "cq enqueue 40"]);
    assert_eq!(session.circular().slots(), &[Some(40), Some(20), Some(30)]);
    assert_eq!(session.circular().front(), Some(1));
    assert_eq!(session.circular().rear(), Some(0));
    assert_eq!(session.circular().values(), vec![20, 30, 40]);

    run(&mut session, &["cq show"]);
    assert_eq!(session.steps().last(), Some("Queue elements: [20, 30, 40]"));
}

#[test]
fn test_avl_flow() {
    let mut session = session_with(&[3, 1, 2]);
    run(&mut session, &["avl insert 10,20,30"]);

    let avl = session.avl();
    assert_eq!(avl.values(Order::PreOrder), vec![20, 10, 30]);
    assert_eq!(session.stats().rotations, 1);
    assert!(session
        .steps()
        .entries()
        .iter()
        .any(|s| s == "Performing Left Rotation (RR Case)"));

    run(&mut session, &["avl check"]);
    assert!(session
        .steps()
        .entries()
        .iter()
        .all(|s| s.ends_with("(balanced)") || !s.starts_with("Node")));

    run(&mut session, &["avl delete 10", "avl delete 99"]);
    assert_eq!(session.avl().values(Order::InOrder), vec![20, 30]);
    assert_eq!(session.status().message, "99 not found in AVL Tree");

    run(&mut session, &["avl reset"]);
    assert!(session.avl().is_empty());
}

#[test]
fn test_bst_traverse_orders() {
    let mut session = session_with(&[3, 1, 2]);
    run(&mut session, &["bst insert 5,3,8,1,4", "bst traverse post"]);
    assert_eq!(
        session.steps().entries()[0],
        "Post-order Traversal: 1 → 4 → 3 → 8 → 5"
    );
    assert_eq!(session.stats().passes, 5);
}
