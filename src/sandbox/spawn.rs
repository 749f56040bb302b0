//! Sandbox domain: the demo level layout.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::MechanicsConfig;
use crate::door::{CloseOnStart, SlidingDoor};
use crate::feedback::AnimationController;
use crate::health::{DeathSequence, Hazard, Health, HealthFeedback, HealthPickup};
use crate::level::LevelCompletionTrigger;
use crate::platform::SlidingPlatform;
use crate::player::{Locomotion, Player};
use crate::sandbox::SandboxSounds;
use crate::ui::{Hud, spawn_hud};
use crate::zones::{GameLayer, InteractionZone};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
pub(crate) const PLAYER_SPAWN: Vec3 = Vec3::new(-560.0, -120.0, 0.0);
pub(crate) const GROUND_Y: f32 = -200.0;

pub(crate) fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn spawn_sandbox(
    mut commands: Commands,
    config: Res<MechanicsConfig>,
    sounds: Res<SandboxSounds>,
) {
    let hud = spawn_hud(&mut commands);

    spawn_ground(&mut commands);
    spawn_player(&mut commands, &config, &sounds, &hud);
    spawn_pickup(&mut commands, Vec3::new(-380.0, GROUND_Y + 40.0, 0.0));
    spawn_hazard(&mut commands, Vec3::new(-220.0, GROUND_Y + 28.0, 0.0));
    spawn_door(&mut commands, &config, &sounds, Vec3::new(40.0, GROUND_Y + 80.0, 0.0));
    spawn_platform(&mut commands, &config, Vec3::new(300.0, GROUND_Y + 110.0, 0.0));
    spawn_goal(&mut commands, &config, &sounds, &hud, Vec3::new(620.0, GROUND_Y + 60.0, 0.0));

    info!("Sandbox level spawned");
}

/// Collision layers for an overlap-only volume the player can walk through.
fn sensor_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player])
}

fn spawn_ground(commands: &mut Commands) {
    commands.spawn((
        Name::new("Ground"),
        Sprite {
            color: Color::srgb(0.4, 0.5, 0.4),
            custom_size: Some(Vec2::new(1400.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, GROUND_Y, 0.0),
        RigidBody::Static,
        Collider::rectangle(1400.0, 40.0),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

fn spawn_player(
    commands: &mut Commands,
    config: &MechanicsConfig,
    sounds: &SandboxSounds,
    hud: &Hud,
) {
    let mut feedback = HealthFeedback::from_config(&config.health);
    feedback.slider = Some(hud.health_slider);
    feedback.flash_overlay = Some(hud.flash_overlay);
    feedback.game_over_text = Some(hud.game_over_text);
    feedback.pickup_sound = sounds.pickup.clone();
    feedback.game_over_sound = sounds.game_over.clone();

    commands.spawn((
        // Identity & Movement
        (Name::new("Player"), Player, Locomotion::default()),
        // Health
        (
            Health::new(config.health.max_health),
            feedback,
            DeathSequence {
                pause_delay: config.health.death_pause_delay,
            },
            AnimationController::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is applied by the locomotion system
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Obstacle, GameLayer::Sensor],
            ),
        ),
    ));
}

fn spawn_pickup(commands: &mut Commands, position: Vec3) {
    commands.spawn((
        Name::new("Health Pickup"),
        HealthPickup,
        Sprite {
            color: Color::srgb(0.3, 0.9, 0.4),
            custom_size: Some(Vec2::splat(20.0)),
            ..default()
        },
        Transform::from_translation(position),
        Collider::circle(12.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers(),
    ));
}

fn spawn_hazard(commands: &mut Commands, position: Vec3) {
    commands.spawn((
        Name::new("Spikes"),
        Hazard::new(10, 1.0),
        Sprite {
            color: Color::srgb(0.8, 0.2, 0.2),
            custom_size: Some(Vec2::new(64.0, 16.0)),
            ..default()
        },
        Transform::from_translation(position),
        Collider::rectangle(64.0, 16.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers(),
    ));
}

/// Solid door body with a wider sensor child as its interaction zone.
fn spawn_door(
    commands: &mut Commands,
    config: &MechanicsConfig,
    sounds: &SandboxSounds,
    position: Vec3,
) {
    let mut door = SlidingDoor::from_config(position, &config.door);
    door.sound = sounds.door.clone();

    let mut entity = commands.spawn((
        Name::new("Door"),
        door,
        InteractionZone::default(),
        Sprite {
            color: Color::srgb(0.45, 0.35, 0.25),
            custom_size: Some(Vec2::new(24.0, 120.0)),
            ..default()
        },
        Transform::from_translation(position),
        RigidBody::Kinematic,
        Collider::rectangle(24.0, 120.0),
        CollisionLayers::new(GameLayer::Obstacle, [GameLayer::Player]),
    ));
    if config.door.close_on_start {
        entity.insert(CloseOnStart {
            delay: config.door.close_on_start_delay,
        });
    }
    entity.with_children(|parent| {
        parent.spawn((
            Transform::default(),
            Collider::rectangle(120.0, 140.0),
            Sensor,
            CollisionEventsEnabled,
            sensor_layers(),
        ));
    });
}

fn spawn_platform(commands: &mut Commands, config: &MechanicsConfig, position: Vec3) {
    commands.spawn((
        Name::new("Sliding Platform"),
        SlidingPlatform::from_config(position, &config.platform),
        Sprite {
            color: Color::srgb(0.5, 0.4, 0.3),
            custom_size: Some(Vec2::new(120.0, 16.0)),
            ..default()
        },
        Transform::from_translation(position),
        RigidBody::Kinematic,
        Collider::rectangle(120.0, 16.0),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

fn spawn_goal(
    commands: &mut Commands,
    config: &MechanicsConfig,
    sounds: &SandboxSounds,
    hud: &Hud,
    position: Vec3,
) {
    let mut trigger = LevelCompletionTrigger::from_config(&config.level);
    trigger.text = Some(hud.level_complete_text);
    trigger.sound = sounds.level_complete.clone();

    commands.spawn((
        Name::new("Level Goal"),
        trigger,
        InteractionZone::default(),
        Sprite {
            color: Color::srgba(0.95, 0.85, 0.3, 0.4),
            custom_size: Some(Vec2::new(60.0, 80.0)),
            ..default()
        },
        Transform::from_translation(position),
        Collider::rectangle(60.0, 80.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers(),
    ));
}
