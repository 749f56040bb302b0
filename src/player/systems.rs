//! Player domain: input sampling, ground probe and locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::health::Health;
use crate::player::{Locomotion, Player, PlayerInput, PlayerTuning};
use crate::zones::GameLayer;

pub(crate) fn read_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<PlayerInput>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.axis_x = x;
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyW);
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&GlobalTransform, &Collider, &mut Locomotion), With<Player>>,
) {
    // Platforms and doors both count as something to stand on
    let ground_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Obstacle]);

    for (transform, collider, mut locomotion) in &mut query {
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation().truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(ray_origin, Dir2::NEG_Y, 4.0, true, &ground_filter);

        let was_on_ground = locomotion.on_ground;
        locomotion.on_ground = hit.is_some();
        if locomotion.on_ground && !was_on_ground {
            locomotion.coyote_timer = 0.0;
            debug!("Player landed");
        }
    }
}

pub(crate) fn apply_locomotion(
    time: Res<Time>,
    input: Res<PlayerInput>,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&mut Locomotion, &mut LinearVelocity, Option<&Health>), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut locomotion, mut velocity, health) in &mut query {
        if !locomotion.on_ground {
            locomotion.coyote_timer += dt;
        }

        // The dead keep falling but take no more input
        let alive = !health.is_some_and(Health::is_dead);
        let axis_x = if alive { input.axis_x } else { 0.0 };

        let target_vx = axis_x * tuning.max_speed;
        if axis_x.abs() > 0.1 {
            let accel = tuning.accel * dt;
            if velocity.x < target_vx {
                velocity.x = (velocity.x + accel).min(target_vx);
            } else {
                velocity.x = (velocity.x - accel).max(target_vx);
            }
        } else {
            let decel = tuning.decel * dt;
            if velocity.x > 0.0 {
                velocity.x = (velocity.x - decel).max(0.0);
            } else {
                velocity.x = (velocity.x + decel).min(0.0);
            }
        }

        let can_jump = locomotion.on_ground || locomotion.coyote_timer < tuning.coyote_time;
        if alive && input.jump_just_pressed && can_jump {
            velocity.y = tuning.jump_velocity;
            locomotion.coyote_timer = tuning.coyote_time;
        } else if !locomotion.on_ground {
            velocity.y -= tuning.gravity * dt;
        } else if velocity.y < 0.0 {
            velocity.y = 0.0;
        }
    }
}
