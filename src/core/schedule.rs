//! Core domain: delayed continuations driven by the frame clock.
//!
//! A continuation is a closure over `&mut World` paired with a timer measured
//! in simulated (virtual) time. Entries are never cancelled; they fire once
//! their timer runs out and are then dropped.

use std::time::Duration;

use bevy::prelude::*;

/// Continuation run when a delayed action comes due.
pub type DelayedAction = Box<dyn FnOnce(&mut World) + Send + Sync + 'static>;

struct PendingAction {
    label: &'static str,
    timer: Timer,
    action: DelayedAction,
}

/// Timer queue of scheduled continuations.
#[derive(Resource, Default)]
pub struct DelayedActions {
    pending: Vec<PendingAction>,
}

impl DelayedActions {
    /// Queue `action` to run after `delay` of simulated time.
    pub fn schedule(
        &mut self,
        label: &'static str,
        delay: Duration,
        action: impl FnOnce(&mut World) + Send + Sync + 'static,
    ) {
        debug!("[SCHEDULE] '{}' queued to fire in {:?}", label, delay);
        self.pending.push(PendingAction {
            label,
            timer: Timer::new(delay, TimerMode::Once),
            action: Box::new(action),
        });
    }

    /// Advance every timer by `delta` and drain the entries that came due,
    /// preserving scheduling order.
    pub fn tick(&mut self, delta: Duration) -> Vec<(&'static str, DelayedAction)> {
        for entry in &mut self.pending {
            entry.timer.tick(delta);
        }

        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|entry| entry.timer.remaining().is_zero());
        self.pending = waiting;

        due.into_iter()
            .map(|entry| (entry.label, entry.action))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Labels of the actions still waiting, in scheduling order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.pending.iter().map(|entry| entry.label).collect()
    }
}

/// Exclusive system: tick the queue with this frame's virtual delta and run
/// whatever came due.
pub(crate) fn run_delayed_actions(world: &mut World) {
    let delta = world.resource::<Time>().delta();
    let due = world.resource_mut::<DelayedActions>().tick(delta);

    for (label, action) in due {
        debug!("[SCHEDULE] running '{}'", label);
        action(world);
    }
}
