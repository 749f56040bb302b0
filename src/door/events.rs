//! Door domain: toggle notification.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::door::DoorPosition;

#[derive(Debug, Clone, Copy)]
pub struct DoorToggled {
    pub door: Entity,
    pub position: DoorPosition,
}

impl Message for DoorToggled {}
