//! Sandbox domain: tests for the demo level layout.

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::SandboxSounds;
use super::spawn::spawn_sandbox;
use crate::content::MechanicsConfig;
use crate::door::{CloseOnStart, SlidingDoor};
use crate::health::{Hazard, HealthFeedback, HealthPickup};
use crate::level::LevelCompletionTrigger;
use crate::platform::SlidingPlatform;
use crate::player::Player;
use crate::testing::test_app;

fn sandbox_world() -> App {
    let mut app = test_app();
    app.insert_resource(MechanicsConfig::default())
        .insert_resource(SandboxSounds::default());
    app.world_mut().run_system_once(spawn_sandbox).unwrap();
    app
}

fn count<C: Component>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), With<C>>()
        .iter(app.world())
        .count()
}

#[test]
fn test_sandbox_spawns_one_of_each_mechanic() {
    let mut app = sandbox_world();

    assert_eq!(count::<Player>(&mut app), 1);
    assert_eq!(count::<HealthPickup>(&mut app), 1);
    assert_eq!(count::<Hazard>(&mut app), 1);
    assert_eq!(count::<SlidingDoor>(&mut app), 1);
    assert_eq!(count::<SlidingPlatform>(&mut app), 1);
    assert_eq!(count::<LevelCompletionTrigger>(&mut app), 1);
    assert_eq!(count::<CloseOnStart>(&mut app), 1);
}

#[test]
fn test_player_feedback_points_at_hud_nodes() {
    let mut app = sandbox_world();
    let feedback = app
        .world_mut()
        .query::<&HealthFeedback>()
        .single(app.world())
        .unwrap()
        .clone();

    let slider = feedback.slider.unwrap();
    let overlay = feedback.flash_overlay.unwrap();
    let text = feedback.game_over_text.unwrap();
    assert!(app.world().get::<crate::feedback::HealthSlider>(slider).is_some());
    assert!(app.world().get::<BackgroundColor>(overlay).is_some());
    assert!(app.world().get::<Text>(text).is_some());

    // No audio files ship with the crate
    assert!(feedback.pickup_sound.is_none());
}
