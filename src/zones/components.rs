//! Zones domain: zone membership state and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors and moving platforms
    Ground,
    /// Player character
    Player,
    /// Trigger volumes and pickups - never block movement
    Sensor,
    /// Solid obstacles such as doors
    Obstacle,
}

/// Occupancy of a trigger volume by the player.
///
/// Shared by every mechanic that reacts to "player is standing here".
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InteractionZone {
    pub occupied: bool,
}

/// Action-key edge sampled once per tick.
#[derive(Resource, Debug, Default)]
pub struct InteractInput {
    pub just_pressed: bool,
}
