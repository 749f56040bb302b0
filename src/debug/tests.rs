//! Debug domain: tests for the hotkeys.

use bevy::prelude::*;

use super::DebugState;
use super::systems::handle_debug_hotkeys;
use crate::core::{freeze_simulation, is_frozen};
use crate::feedback::FeedbackPlugin;
use crate::health::{DeathSequence, Health, HealthPlugin};
use crate::player::Player;
use crate::testing::{advance, test_app};

fn debug_app() -> (App, Entity) {
    let mut app = test_app();
    app.add_plugins((FeedbackPlugin, HealthPlugin))
        .init_resource::<DebugState>()
        .init_resource::<ButtonInput<KeyCode>>()
        .add_systems(Update, handle_debug_hotkeys);
    let player = app
        .world_mut()
        .spawn((Player, Health::new(30), DeathSequence::default()))
        .id();
    advance(&mut app, 1);
    (app, player)
}

/// Hold Ctrl, tap `key` for one update, then release everything.
fn chord(app: &mut App, key: KeyCode) {
    {
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.press(KeyCode::ControlLeft);
        keyboard.press(key);
    }
    app.update();
    let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keyboard.release_all();
    keyboard.clear();
}

fn health(app: &App, player: Entity) -> Health {
    app.world().get::<Health>(player).unwrap().clone()
}

#[test]
fn test_damage_and_heal_hotkeys() {
    let (mut app, player) = debug_app();

    chord(&mut app, KeyCode::KeyJ);
    advance(&mut app, 1);
    assert_eq!(health(&app, player).current(), 20);

    chord(&mut app, KeyCode::KeyH);
    advance(&mut app, 1);
    assert_eq!(health(&app, player).current(), 30);
}

#[test]
fn test_key_without_ctrl_does_nothing() {
    let (mut app, player) = debug_app();

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyK);
    advance(&mut app, 2);

    assert!(!health(&app, player).is_dead());
}

#[test]
fn test_kill_then_resume() {
    let (mut app, player) = debug_app();

    chord(&mut app, KeyCode::KeyK);
    advance(&mut app, 1);
    assert!(health(&app, player).is_dead());

    freeze_simulation(app.world_mut(), "test");
    chord(&mut app, KeyCode::KeyP);
    assert!(!is_frozen(app.world().resource::<Time<Virtual>>()));
}
