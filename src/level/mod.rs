//! Level domain: "stand in the zone and press the action key" completion.

mod components;
mod events;
mod systems;


pub use components::LevelCompletionTrigger;
pub use events::LevelCompleted;

use bevy::prelude::*;

use crate::level::systems::{complete_level_on_interact, init_level_triggers};
use crate::zones::ZoneTracking;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LevelCompleted>().add_systems(
            Update,
            (init_level_triggers, complete_level_on_interact)
                .chain()
                .after(ZoneTracking),
        );
    }
}
