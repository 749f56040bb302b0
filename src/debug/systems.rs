//! Debug domain: hotkeys, gizmos and the info overlay.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{DelayedActions, is_frozen, resume_simulation};
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::door::SlidingDoor;
use crate::health::{DamageRequest, HealRequest, Health};
use crate::platform::SlidingPlatform;
use crate::player::Player;

const DEBUG_DAMAGE: u32 = 10;

/// Handle Ctrl+key shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut time: ResMut<Time<Virtual>>,
    player_query: Query<(Entity, &Health), With<Player>>,
    mut damage_events: MessageWriter<DamageRequest>,
    mut heal_events: MessageWriter<HealRequest>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    // Ctrl+J: Damage the player
    if keyboard.just_pressed(KeyCode::KeyJ) {
        for (entity, _) in &player_query {
            damage_events.write(DamageRequest {
                target: entity,
                amount: DEBUG_DAMAGE,
            });
        }
        debug_state.set_message(format!("Dealt {} damage", DEBUG_DAMAGE), 2.0);
        info!("[DEBUG] Dealt {} damage to player", DEBUG_DAMAGE);
    }

    // Ctrl+H: Full heal
    if keyboard.just_pressed(KeyCode::KeyH) {
        for (entity, health) in &player_query {
            heal_events.write(HealRequest {
                target: entity,
                amount: health.max(),
            });
        }
        debug_state.set_message("Full heal", 2.0);
        info!("[DEBUG] Full heal");
    }

    // Ctrl+K: Kill the player
    if keyboard.just_pressed(KeyCode::KeyK) {
        for (entity, health) in &player_query {
            damage_events.write(DamageRequest {
                target: entity,
                amount: health.current(),
            });
        }
        debug_state.set_message("Killed player", 2.0);
        info!("[DEBUG] Killed player");
    }

    // Ctrl+P: Unfreeze the clock after a death or level completion
    if keyboard.just_pressed(KeyCode::KeyP) && is_frozen(&time) {
        resume_simulation(&mut time);
        debug_state.set_message("Simulation resumed", 2.0);
    }

    // Ctrl+G: Toggle gizmos
    if keyboard.just_pressed(KeyCode::KeyG) {
        debug_state.show_gizmos = !debug_state.show_gizmos;
        info!("[DEBUG] Gizmos {}", on_off(debug_state.show_gizmos));
    }

    // Ctrl+O: Toggle info overlay
    if keyboard.just_pressed(KeyCode::KeyO) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Info overlay {}", on_off(debug_state.show_info));
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}

/// Status messages count down in real time so they still clear while the
/// simulation is frozen.
pub(crate) fn update_status_message(time: Res<Time<Real>>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

/// Platform center in yellow, both endpoints in blue.
pub(crate) fn draw_platform_gizmos(mut gizmos: Gizmos, platforms: Query<&SlidingPlatform>) {
    for platform in &platforms {
        let (low, high) = platform.endpoints();
        gizmos.circle_2d(platform.center.truncate(), 6.0, Color::srgb(1.0, 0.9, 0.2));
        gizmos.circle_2d(low.truncate(), 6.0, Color::srgb(0.2, 0.4, 1.0));
        gizmos.circle_2d(high.truncate(), 6.0, Color::srgb(0.2, 0.4, 1.0));
        gizmos.line_2d(low.truncate(), high.truncate(), Color::srgba(0.2, 0.4, 1.0, 0.4));
    }
}

/// Open point in green, closed point in red, current target highlighted.
pub(crate) fn draw_door_gizmos(mut gizmos: Gizmos, doors: Query<&SlidingDoor>) {
    for door in &doors {
        let open = door.open_position.truncate();
        let closed = door.closed_position.truncate();
        gizmos.line_2d(open, closed, Color::srgba(0.8, 0.8, 0.8, 0.4));
        gizmos.circle_2d(open, 5.0, Color::srgb(0.2, 0.9, 0.3));
        gizmos.circle_2d(closed, 5.0, Color::srgb(0.9, 0.2, 0.2));
        gizmos.circle_2d(door.target().truncate(), 9.0, Color::WHITE);
    }
}

/// Update the debug info overlay with current player and clock state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    time: Res<Time<Virtual>>,
    delayed: Res<DelayedActions>,
    player_query: Query<(&Transform, &Health), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, health)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        let status = debug_state
            .status_message
            .as_ref()
            .map(|(message, _)| message.as_str())
            .unwrap_or("");
        **text = format!(
            "Pos: ({:.0}, {:.0})\nHP: {}/{}{}\nFrozen: {}\nPending: {:?}\n{}",
            pos.x,
            pos.y,
            health.current(),
            health.max(),
            if health.is_dead() { " (dead)" } else { "" },
            is_frozen(&time),
            delayed.labels(),
            status
        );
    }
}
