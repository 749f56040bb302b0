//! Core domain: delayed continuations and global clock control.

mod clock;
mod schedule;

#[cfg(test)]
mod tests;

pub use clock::{freeze_simulation, is_frozen, resume_simulation};
pub use schedule::{DelayedAction, DelayedActions};

use bevy::prelude::*;

use crate::core::schedule::run_delayed_actions;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DelayedActions>()
            .add_systems(PreUpdate, run_delayed_actions);
    }
}
