//! Door domain: the two-state sliding door.

use bevy::prelude::*;

use crate::content::{DoorConfig, SlideDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum DoorPosition {
    #[default]
    Open,
    Closed,
}

impl DoorPosition {
    pub fn toggled(self) -> Self {
        match self {
            DoorPosition::Open => DoorPosition::Closed,
            DoorPosition::Closed => DoorPosition::Open,
        }
    }
}

/// A door that slides between two fixed points. Both points are computed
/// once from the spawn position; the door starts open.
#[derive(Component, Debug, Clone)]
pub struct SlidingDoor {
    pub position: DoorPosition,
    pub open_position: Vec3,
    pub closed_position: Vec3,
    pub speed: f32,
    pub sound: Option<Handle<AudioSource>>,
}

impl SlidingDoor {
    pub fn new(open_position: Vec3, direction: SlideDirection, distance: f32, speed: f32) -> Self {
        Self {
            position: DoorPosition::Open,
            open_position,
            closed_position: open_position - direction.unit() * distance,
            speed,
            sound: None,
        }
    }

    pub fn from_config(open_position: Vec3, config: &DoorConfig) -> Self {
        Self::new(open_position, config.direction, config.distance, config.speed)
    }

    pub fn target(&self) -> Vec3 {
        match self.position {
            DoorPosition::Open => self.open_position,
            DoorPosition::Closed => self.closed_position,
        }
    }

    /// Flip between open and closed, returning the new position.
    pub fn toggle(&mut self) -> DoorPosition {
        self.position = self.position.toggled();
        self.position
    }
}

/// Close the door once, `delay` seconds after it spawns.
#[derive(Component, Debug, Clone, Copy)]
pub struct CloseOnStart {
    pub delay: f32,
}

/// One interpolation step: move `current` toward `target` by the fraction
/// `speed * dt`, capped at the full distance.
pub fn approach(current: Vec3, target: Vec3, speed: f32, dt: f32) -> Vec3 {
    let t = (speed * dt).clamp(0.0, 1.0);
    current + (target - current) * t
}
