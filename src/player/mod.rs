//! Player domain: a small walk-and-jump controller for the demo level.

mod components;
mod systems;


pub use components::{Locomotion, Player, PlayerInput, PlayerTuning};

use bevy::prelude::*;

use crate::player::systems::{apply_locomotion, detect_ground, read_player_input};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .init_resource::<PlayerInput>()
            .add_systems(
                Update,
                (read_player_input, detect_ground, apply_locomotion).chain(),
            );
    }
}
