//! Debug domain: developer hotkeys and overlays, built with the
//! `dev-tools` feature.
//!
//! Hotkeys (hold Ctrl):
//! - J: damage the player
//! - H: full heal
//! - K: kill the player
//! - P: resume a frozen simulation
//! - G: toggle slide-range gizmos
//! - O: toggle the info overlay

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{
    draw_door_gizmos, draw_platform_gizmos, handle_debug_hotkeys, update_debug_info_overlay,
    update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (
                    handle_debug_hotkeys,
                    update_status_message,
                    update_debug_info_overlay,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (draw_platform_gizmos, draw_door_gizmos)
                    .run_if(|state: Res<DebugState>| state.show_gizmos),
            );
    }
}
