//! Door domain: a sliding door toggled with the action key from inside its
//! zone.

mod components;
mod events;
mod systems;


pub use components::{CloseOnStart, DoorPosition, SlidingDoor, approach};
pub use events::DoorToggled;

use bevy::prelude::*;

use crate::door::systems::{init_sliding_doors, slide_doors, toggle_doors_on_interact};
use crate::zones::ZoneTracking;

pub struct DoorPlugin;

impl Plugin for DoorPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DoorToggled>().add_systems(
            Update,
            (init_sliding_doors, toggle_doors_on_interact, slide_doors)
                .chain()
                .after(ZoneTracking),
        );
    }
}
