//! Player domain: marker, locomotion state and tuning.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug, Default)]
pub struct Locomotion {
    pub on_ground: bool,
    pub coyote_timer: f32,
}

#[derive(Resource, Debug, Clone)]
pub struct PlayerTuning {
    pub max_speed: f32,
    pub accel: f32,
    pub decel: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub coyote_time: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_speed: 260.0,
            accel: 2400.0,
            decel: 2200.0,
            jump_velocity: 620.0,
            gravity: 1700.0,
            coyote_time: 0.1,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    pub axis_x: f32,
    pub jump_just_pressed: bool,
}
