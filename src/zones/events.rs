//! Zones domain: overlap and contact notifications.
//!
//! Mechanics only ever read these messages. In the game they are produced from
//! avian2d collision messages; tests write them directly.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// An actor started overlapping a sensor volume
#[derive(Debug, Clone, Copy)]
pub struct ZoneEntered {
    pub zone: Entity,
    pub actor: Entity,
}

impl Message for ZoneEntered {}

/// An actor stopped overlapping a sensor volume
#[derive(Debug, Clone, Copy)]
pub struct ZoneExited {
    pub zone: Entity,
    pub actor: Entity,
}

impl Message for ZoneExited {}

/// Two solid bodies started touching
#[derive(Debug, Clone, Copy)]
pub struct ContactStarted {
    pub a: Entity,
    pub b: Entity,
}

impl ContactStarted {
    /// Returns the entity paired with `entity`, if `entity` takes part.
    pub fn other(&self, entity: Entity) -> Option<Entity> {
        pair_other(self.a, self.b, entity)
    }
}

impl Message for ContactStarted {}

/// Two solid bodies stopped touching
#[derive(Debug, Clone, Copy)]
pub struct ContactEnded {
    pub a: Entity,
    pub b: Entity,
}

impl ContactEnded {
    pub fn other(&self, entity: Entity) -> Option<Entity> {
        pair_other(self.a, self.b, entity)
    }
}

impl Message for ContactEnded {}

fn pair_other(a: Entity, b: Entity, entity: Entity) -> Option<Entity> {
    if a == entity {
        Some(b)
    } else if b == entity {
        Some(a)
    } else {
        None
    }
}
