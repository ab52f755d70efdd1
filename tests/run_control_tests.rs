// Integration tests for run ownership: supersession, pause and start guards

mod common;

use algotty::command::{Command, SortKind, TreeKind};
use algotty::run::Immediate;
use algotty::structures::avl;
use algotty::structures::tree::Order;
use common::{session_with, Cue, ScriptedDriver};
use std::time::Duration;

const INPUT: [i32; 5] = [5, 1, 4, 2, 8];

#[test]
fn test_superseded_sort_emits_nothing_more() {
    let mut session = session_with(&INPUT);
    let mut driver = ScriptedDriver::new().cue(3, Cue::Supersede);

    session
        .execute(Command::Sort(SortKind::Bubble), &mut driver)
        .unwrap();

    let (cue, steps_then) = driver.steps_at_cue[0];
    assert_eq!(cue, Cue::Supersede);
    assert_eq!(session.steps().len(), steps_then);
    assert_eq!(driver.waits.len(), 4);
    assert_eq!(
        *driver.presented_comparisons.last().unwrap(),
        session.stats().comparisons
    );

    // The committed array is untouched and nothing is animating
    assert_eq!(session.array(), &INPUT);
    assert!(!session.control().is_animating());
}

#[test]
fn test_run_started_while_suspended_owns_the_display() {
    let mut session = session_with(&INPUT);
    let mut driver = ScriptedDriver::new()
        .cue(2, Cue::Supersede)
        .cue(2, Cue::Begin);

    session
        .execute(Command::Sort(SortKind::Insertion), &mut driver)
        .unwrap();

    assert_eq!(driver.begin_results, vec![true]);
    let (_, steps_then) = driver.steps_at_cue[0];
    assert_eq!(session.steps().len(), steps_then);
    assert_eq!(session.array(), &INPUT);
    // The stale run must not end the newer one
    assert!(session.control().is_animating());
}

#[test]
fn test_second_start_is_ignored() {
    let mut session = session_with(&INPUT);
    let mut driver = ScriptedDriver::new().cue(1, Cue::Begin);

    session
        .execute(Command::Sort(SortKind::Selection), &mut driver)
        .unwrap();

    assert_eq!(driver.begin_results, vec![false]);
    assert_eq!(session.array(), &[1, 2, 4, 5, 8]);
    assert!(!session.control().is_animating());
}

#[test]
fn test_pause_does_not_consume_step_time() {
    let mut baseline_session = session_with(&INPUT);
    let mut baseline = ScriptedDriver::new();
    baseline_session
        .execute(Command::Sort(SortKind::Bubble), &mut baseline)
        .unwrap();

    let mut session = session_with(&INPUT);
    let mut driver = ScriptedDriver::new()
        .cue(2, Cue::Pause)
        .cue(6, Cue::Resume);
    session
        .execute(Command::Sort(SortKind::Bubble), &mut driver)
        .unwrap();

    let paused: Vec<_> = driver.waits.iter().filter(|w| w.paused).collect();
    assert_eq!(paused.len(), 4);
    assert!(paused.iter().all(|w| w.duration == Duration::from_millis(100)));
    assert_eq!(driver.unpaused_time(), baseline.unpaused_time());

    // Same run, same result
    assert_eq!(session.array(), baseline_session.array());
    assert_eq!(session.steps().entries(), baseline_session.steps().entries());
    assert_eq!(session.stats(), baseline_session.stats());
}

#[test]
fn test_pause_repaints_once_per_toggle() {
    let mut session = session_with(&INPUT);
    let mut plain = ScriptedDriver::new();
    session
        .execute(Command::Search(algotty::command::SearchKind::Linear, 8), &mut plain)
        .unwrap();

    let mut session = session_with(&INPUT);
    let mut driver = ScriptedDriver::new()
        .cue(0, Cue::Pause)
        .cue(3, Cue::Resume);
    session
        .execute(Command::Search(algotty::command::SearchKind::Linear, 8), &mut driver)
        .unwrap();

    assert_eq!(
        driver.presented_steps.len(),
        plain.presented_steps.len() + 2
    );
}

#[test]
fn test_speed_change_applies_to_next_step() {
    let mut baseline_session = session_with(&INPUT);
    let mut baseline = ScriptedDriver::new();
    baseline_session
        .execute(Command::Sort(SortKind::Bubble), &mut baseline)
        .unwrap();
    let steps = baseline.waits.len();
    assert!(steps > 3);

    // Slow down during the third step of the same run
    let mut session = session_with(&INPUT);
    let mut driver = ScriptedDriver::new().cue(2, Cue::Speed(300));
    session
        .execute(Command::Sort(SortKind::Bubble), &mut driver)
        .unwrap();

    // The step in flight keeps its delay; every later one takes 300ms in
    // slices of at most 100ms
    assert!(driver
        .waits
        .iter()
        .all(|w| w.duration == Duration::from_millis(100)));
    assert_eq!(driver.waits.len(), 3 + 3 * (steps - 3));
    let after_cue: Duration = driver.waits[3..].iter().map(|w| w.duration).sum();
    assert_eq!(after_cue, Duration::from_millis(300) * (steps as u32 - 3));
    assert_eq!(session.control().speed(), Duration::from_millis(300));

    assert_eq!(session.array(), baseline_session.array());
    assert_eq!(session.stats(), baseline_session.stats());
}

#[test]
fn test_superseded_avl_insert_stays_balanced() {
    let mut session = session_with(&INPUT);
    // Inserting 50 descends through 20, 30 and 40; cue on its first visit
    let mut driver = ScriptedDriver::new().cue(5, Cue::Supersede);

    session
        .execute(
            Command::TreeInsert(TreeKind::Avl, vec![10, 20, 30, 40, 50]),
            &mut driver,
        )
        .unwrap();

    let (cue, steps_then) = driver.steps_at_cue[0];
    assert_eq!(cue, Cue::Supersede);
    assert_eq!(session.steps().len(), steps_then);
    assert_eq!(driver.waits.len(), 6);

    // 30 triggered one rotation before the cue; none after it
    let rotations: Vec<_> = session
        .steps()
        .entries()
        .iter()
        .filter(|s| s.starts_with("Performing"))
        .collect();
    assert_eq!(rotations.len(), 1);
    assert_eq!(session.stats().rotations, 1);

    let tree = session.avl();
    assert!(avl::is_balanced(tree));
    assert_eq!(tree.values(Order::InOrder), vec![10, 20, 30, 40]);
    assert!(!session.control().is_animating());
}

#[test]
fn test_reset_after_superseded_insert_keeps_partial_tree() {
    let mut session = session_with(&INPUT);
    let mut driver = ScriptedDriver::new().cue(4, Cue::Supersede);

    session
        .execute(Command::TreeInsert(TreeKind::Bst, vec![5, 3, 8, 1, 4]), &mut driver)
        .unwrap();

    // Values inserted before the cue stay; the rest were never inserted
    let values = session.bst().values(Order::InOrder);
    assert!(values.len() < 5);
    assert!(values.windows(2).all(|w| w[0] < w[1]));

    session.execute(Command::Reset, &mut Immediate).unwrap();
    assert!(session.steps().is_empty());
    assert_eq!(session.status().message, "Visualization reset");
    assert_eq!(session.array().len(), 5);
}
