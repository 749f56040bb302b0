//! Sandbox domain: audio clips for the demo level.

use std::path::Path;

use bevy::prelude::*;

const ASSET_ROOT: &str = "assets";

/// Sound handles for the demo level. A clip whose file is missing stays
/// `None`, and the mechanic using it reports that at spawn.
#[derive(Resource, Debug, Default)]
pub struct SandboxSounds {
    pub pickup: Option<Handle<AudioSource>>,
    pub game_over: Option<Handle<AudioSource>>,
    pub level_complete: Option<Handle<AudioSource>>,
    pub door: Option<Handle<AudioSource>>,
}

fn load_optional(asset_server: &AssetServer, path: &'static str) -> Option<Handle<AudioSource>> {
    if Path::new(ASSET_ROOT).join(path).exists() {
        Some(asset_server.load(path))
    } else {
        debug!("No audio file at {}/{}", ASSET_ROOT, path);
        None
    }
}

pub(crate) fn load_sandbox_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SandboxSounds {
        pickup: load_optional(&asset_server, "audio/pickup.ogg"),
        game_over: load_optional(&asset_server, "audio/game_over.ogg"),
        level_complete: load_optional(&asset_server, "audio/level_complete.ogg"),
        door: load_optional(&asset_server, "audio/door.ogg"),
    });
}
