//! Level domain: completion notification.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct LevelCompleted {
    pub trigger: Entity,
}

impl Message for LevelCompleted {}
