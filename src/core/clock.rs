//! Core domain: global simulation clock control.

use bevy::prelude::*;

/// Set the global time-scale to zero. Every tick-driven motion and every
/// pending delayed action stops advancing.
pub fn freeze_simulation(world: &mut World, reason: &str) {
    let mut time = world.resource_mut::<Time<Virtual>>();
    time.set_relative_speed(0.0);
    info!("[CLOCK] Simulation frozen: {}", reason);
}

/// Restore the time-scale to normal speed.
pub fn resume_simulation(time: &mut Time<Virtual>) {
    time.set_relative_speed(1.0);
    info!("[CLOCK] Simulation resumed");
}

pub fn is_frozen(time: &Time<Virtual>) -> bool {
    time.relative_speed() == 0.0
}
