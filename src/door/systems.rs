//! Door domain: initialization, toggling and movement systems.

use std::time::Duration;

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::DelayedActions;
use crate::door::{CloseOnStart, DoorToggled, SlidingDoor, approach};
use crate::feedback::PlayCue;
use crate::zones::{InteractInput, InteractionZone, display_name};

/// Report a missing door sound and queue the start-of-level close.
/// Negative close delays are clamped to zero with a warning.
pub(crate) fn init_sliding_doors(
    mut doors: Query<
        (Entity, &SlidingDoor, Option<&mut CloseOnStart>, Option<&Name>),
        Added<SlidingDoor>,
    >,
    mut delayed: ResMut<DelayedActions>,
) {
    for (entity, door, close_on_start, name) in &mut doors {
        let owner = display_name(entity, name);
        if door.sound.is_none() {
            warn!("Door sound is not assigned on {}", owner);
        }

        let Some(mut close_on_start) = close_on_start else {
            continue;
        };
        if close_on_start.delay < 0.0 || close_on_start.delay.is_nan() {
            close_on_start.delay = 0.0;
            warn!("Auto-close delay was negative; set to 0 on {}", owner);
        }
        delayed.schedule(
            "door_auto_close",
            Duration::from_secs_f32(close_on_start.delay),
            move |world: &mut World| {
                let Some((position, sound)) = world
                    .get_mut::<SlidingDoor>(entity)
                    .map(|mut door| (door.toggle(), door.sound.clone()))
                else {
                    return;
                };
                info!("[DOOR] {} auto-toggled to {:?}", owner, position);

                world.write_message(PlayCue {
                    sound,
                    label: "door",
                });
                world.write_message(DoorToggled {
                    door: entity,
                    position,
                });
            },
        );
    }
}

pub(crate) fn toggle_doors_on_interact(
    input: Res<InteractInput>,
    mut doors: Query<(Entity, &mut SlidingDoor, &InteractionZone, Option<&Name>)>,
    mut cue_events: MessageWriter<PlayCue>,
    mut toggled_events: MessageWriter<DoorToggled>,
) {
    if !input.just_pressed {
        return;
    }

    for (entity, mut door, zone, name) in &mut doors {
        if !zone.occupied {
            continue;
        }
        let position = door.toggle();
        info!(
            "[DOOR] {} toggled to {:?}",
            display_name(entity, name),
            position
        );

        cue_events.write(PlayCue {
            sound: door.sound.clone(),
            label: "door",
        });
        toggled_events.write(DoorToggled {
            door: entity,
            position,
        });
    }
}

pub(crate) fn slide_doors(time: Res<Time>, mut doors: Query<(&SlidingDoor, &mut Transform)>) {
    let dt = time.delta_secs();

    for (door, mut transform) in &mut doors {
        transform.translation = approach(transform.translation, door.target(), door.speed, dt);
    }
}
