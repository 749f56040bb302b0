//! Zones domain: zone membership, contact notifications and interact input.

mod components;
mod events;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GameLayer, InteractInput, InteractionZone};
pub use events::{ContactEnded, ContactStarted, ZoneEntered, ZoneExited};

pub(crate) use systems::display_name;

use bevy::prelude::*;

use crate::zones::systems::{bridge_collision_messages, read_interact_input, track_zone_occupancy};

/// System set for zone bookkeeping; mechanics that read occupancy run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneTracking;

/// Zone occupancy tracking over crate-owned messages. Needs no physics.
pub struct ZonesPlugin;

impl Plugin for ZonesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractInput>()
            .add_message::<ZoneEntered>()
            .add_message::<ZoneExited>()
            .add_message::<ContactStarted>()
            .add_message::<ContactEnded>()
            .add_systems(Update, track_zone_occupancy.in_set(ZoneTracking));
    }
}

/// Feeds `ZonesPlugin` from avian2d collisions and the keyboard.
pub struct PhysicsBridgePlugin;

impl Plugin for PhysicsBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (read_interact_input, bridge_collision_messages).before(ZoneTracking),
        );
    }
}
