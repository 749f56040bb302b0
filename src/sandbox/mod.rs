//! Sandbox domain: a single demo level exercising every mechanic.

mod resources;
mod spawn;

#[cfg(test)]
mod tests;

pub use resources::SandboxSounds;

use bevy::prelude::*;

use crate::sandbox::resources::load_sandbox_sounds;
use crate::sandbox::spawn::{spawn_camera, spawn_sandbox};

pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (spawn_camera, (load_sandbox_sounds, spawn_sandbox).chain()),
        );
    }
}
