//! Core domain: tests for the delayed-action queue and clock control.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use bevy::prelude::*;

use super::{DelayedActions, freeze_simulation, is_frozen, resume_simulation};
use crate::testing::{advance, advance_secs, test_app};

#[derive(Resource, Default)]
struct FireLog(Vec<&'static str>);

// -----------------------------------------------------------------------------
// DelayedActions queue tests
// -----------------------------------------------------------------------------

#[test]
fn test_action_not_due_before_delay() {
    let mut queue = DelayedActions::default();
    queue.schedule("later", Duration::from_secs(1), |_| {});

    let due = queue.tick(Duration::from_millis(400));
    assert!(due.is_empty());
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_action_due_once_delay_elapsed() {
    let mut queue = DelayedActions::default();
    queue.schedule("later", Duration::from_secs(1), |_| {});

    queue.tick(Duration::from_millis(600));
    let due = queue.tick(Duration::from_millis(600));

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].0, "later");
    assert!(queue.is_empty());
}

#[test]
fn test_zero_delay_fires_on_first_tick() {
    let mut queue = DelayedActions::default();
    queue.schedule("now", Duration::ZERO, |_| {});

    let due = queue.tick(Duration::ZERO);
    assert_eq!(due.len(), 1);
}

#[test]
fn test_due_actions_keep_scheduling_order() {
    let mut queue = DelayedActions::default();
    queue.schedule("first", Duration::from_millis(300), |_| {});
    queue.schedule("waiting", Duration::from_secs(5), |_| {});
    queue.schedule("second", Duration::from_millis(100), |_| {});

    let due: Vec<_> = queue
        .tick(Duration::from_millis(500))
        .into_iter()
        .map(|(label, _)| label)
        .collect();

    assert_eq!(due, vec!["first", "second"]);
    assert_eq!(queue.labels(), vec!["waiting"]);
}

// -----------------------------------------------------------------------------
// Tick loop tests
// -----------------------------------------------------------------------------

#[test]
fn test_tick_loop_runs_continuation_after_delay() {
    let mut app = test_app();
    app.init_resource::<FireLog>();

    let fired = Arc::new(AtomicU32::new(0));
    let counter = fired.clone();
    app.world_mut().resource_mut::<DelayedActions>().schedule(
        "count",
        Duration::from_secs(1),
        move |world| {
            counter.fetch_add(1, Ordering::SeqCst);
            world.resource_mut::<FireLog>().0.push("count");
        },
    );

    advance(&mut app, 5);
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    advance(&mut app, 6);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert_eq!(app.world().resource::<FireLog>().0, vec!["count"]);

    // Never fires twice
    advance(&mut app, 20);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn test_frozen_clock_holds_pending_actions() {
    let mut app = test_app();
    app.init_resource::<FireLog>();
    app.world_mut().resource_mut::<DelayedActions>().schedule(
        "held",
        Duration::from_millis(500),
        |world| world.resource_mut::<FireLog>().0.push("held"),
    );

    freeze_simulation(app.world_mut(), "test");
    assert!(is_frozen(app.world().resource::<Time<Virtual>>()));

    advance_secs(&mut app, 2.0);
    assert!(app.world().resource::<FireLog>().0.is_empty());
    assert_eq!(app.world().resource::<DelayedActions>().len(), 1);

    resume_simulation(&mut app.world_mut().resource_mut::<Time<Virtual>>());
    advance_secs(&mut app, 1.0);
    assert_eq!(app.world().resource::<FireLog>().0, vec!["held"]);
}

#[test]
fn test_continuation_can_freeze_the_clock() {
    let mut app = test_app();
    app.world_mut().resource_mut::<DelayedActions>().schedule(
        "pause",
        Duration::from_millis(300),
        |world| freeze_simulation(world, "scheduled pause"),
    );

    advance(&mut app, 1);
    assert!(!is_frozen(app.world().resource::<Time<Virtual>>()));

    advance(&mut app, 4);
    assert!(is_frozen(app.world().resource::<Time<Virtual>>()));
}
