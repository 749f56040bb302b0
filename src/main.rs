mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod door;
mod feedback;
mod health;
mod level;
mod platform;
mod player;
mod sandbox;
#[cfg(test)]
mod testing;
mod ui;
mod zones;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Sliding Mechanics".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin::default(),
        zones::ZonesPlugin,
        zones::PhysicsBridgePlugin,
        player::PlayerPlugin,
        feedback::FeedbackPlugin,
        health::HealthPlugin,
        level::LevelPlugin,
        door::DoorPlugin,
        platform::PlatformPlugin,
        ui::UiPlugin,
        sandbox::SandboxPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
