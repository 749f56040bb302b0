//! Platform domain: the eased sine-wave oscillator and its riders.

use bevy::prelude::*;

use crate::content::{PlatformConfig, PlatformEasing, SlideAxis};

/// Oscillates around `center` along `axis`. The position is a pure function
/// of `phase_time`, which only ever grows.
#[derive(Component, Debug, Clone)]
pub struct SlidingPlatform {
    pub center: Vec3,
    /// Distance from the center to either endpoint
    pub distance: f32,
    pub speed: f32,
    pub axis: SlideAxis,
    pub easing: PlatformEasing,
    pub phase_time: f32,
}

impl SlidingPlatform {
    pub fn from_config(center: Vec3, config: &PlatformConfig) -> Self {
        Self {
            center,
            distance: config.distance,
            speed: config.speed,
            axis: config.axis,
            easing: config.easing,
            phase_time: 0.0,
        }
    }

    /// Eased offset in `[-1, 1]` for a given phase.
    pub fn offset_at(&self, phase: f32) -> f32 {
        let raw = phase.sin();
        self.easing.sample(raw.abs()) * raw.signum()
    }

    pub fn position_at(&self, phase: f32) -> Vec3 {
        self.center + self.axis.unit() * (self.offset_at(phase) * self.distance)
    }

    pub fn endpoints(&self) -> (Vec3, Vec3) {
        let reach = self.axis.unit() * self.distance;
        (self.center - reach, self.center + reach)
    }

    /// Step the phase by `speed * dt` and return the new position.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        self.phase_time += self.speed.max(0.0) * dt.max(0.0);
        self.position_at(self.phase_time)
    }
}

/// Marks an actor carried by a platform. Every tick the platform's motion is
/// added to the rider's translation, so world position is kept as-is when
/// the link is removed.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
#[relationship(relationship_target = Riders)]
pub struct RidingOn(pub Entity);

/// Actors currently carried by this platform.
#[derive(Component, Debug, Default)]
#[relationship_target(relationship = RidingOn)]
pub struct Riders(Vec<Entity>);

impl Riders {
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
