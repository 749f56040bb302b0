//! Platform domain: a platform oscillating along one axis that carries the
//! player while they stand on it.

mod components;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Riders, RidingOn, SlidingPlatform};

use bevy::prelude::*;

use crate::platform::systems::{
    attach_riders, detach_riders, log_new_platforms, oscillate_platforms,
};
use crate::zones::ZoneTracking;

pub struct PlatformPlugin;

impl Plugin for PlatformPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                log_new_platforms,
                detach_riders,
                attach_riders,
                oscillate_platforms,
            )
                .chain()
                .after(ZoneTracking),
        );
    }
}
