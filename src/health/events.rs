//! Health domain: damage/heal requests and change notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct DamageRequest {
    pub target: Entity,
    pub amount: u32,
}

impl Message for DamageRequest {}

#[derive(Debug, Clone, Copy)]
pub struct HealRequest {
    pub target: Entity,
    pub amount: u32,
}

impl Message for HealRequest {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthChangeCause {
    Damage,
    Heal,
    Pickup,
}

/// Emitted whenever a health value actually changed
#[derive(Debug, Clone, Copy)]
pub struct HealthChanged {
    pub entity: Entity,
    pub current: u32,
    pub max: u32,
    pub cause: HealthChangeCause,
}

impl Message for HealthChanged {}

/// Emitted once per entity, on the hit that emptied its health
#[derive(Debug, Clone, Copy)]
pub struct HealthDepleted {
    pub entity: Entity,
}

impl Message for HealthDepleted {}
