//! Zones domain: occupancy tracking, input sampling and the physics bridge.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::player::Player;
use crate::zones::{
    ContactEnded, ContactStarted, InteractInput, InteractionZone, ZoneEntered, ZoneExited,
};

pub(crate) fn read_interact_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<InteractInput>,
) {
    input.just_pressed = keyboard.just_pressed(KeyCode::KeyE);
}

/// Flip `InteractionZone::occupied` as the player enters and leaves.
/// Any other actor is ignored.
pub(crate) fn track_zone_occupancy(
    mut entered_events: MessageReader<ZoneEntered>,
    mut exited_events: MessageReader<ZoneExited>,
    mut zone_query: Query<(&mut InteractionZone, Option<&Name>)>,
    player_query: Query<(), With<Player>>,
) {
    for event in entered_events.read() {
        if player_query.get(event.actor).is_err() {
            continue;
        }
        if let Ok((mut zone, name)) = zone_query.get_mut(event.zone) {
            zone.occupied = true;
            info!(
                "[ZONE] Player entered trigger zone on {}",
                display_name(event.zone, name)
            );
        }
    }

    for event in exited_events.read() {
        if player_query.get(event.actor).is_err() {
            continue;
        }
        if let Ok((mut zone, name)) = zone_query.get_mut(event.zone) {
            zone.occupied = false;
            info!(
                "[ZONE] Player left trigger zone on {}",
                display_name(event.zone, name)
            );
        }
    }
}

/// Translate avian2d collision messages into zone and contact messages.
/// A pair involving a `Sensor` collider is an overlap; anything else is a
/// solid contact. Both sides are reported as their rigid body when they have
/// one, so a sensor child of a door reports the door as the zone.
pub(crate) fn bridge_collision_messages(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    sensor_query: Query<(), With<Sensor>>,
    mut zone_entered: MessageWriter<ZoneEntered>,
    mut zone_exited: MessageWriter<ZoneExited>,
    mut contact_started: MessageWriter<ContactStarted>,
    mut contact_ended: MessageWriter<ContactEnded>,
) {
    for event in collision_start_events.read() {
        let first = event.body1.unwrap_or(event.collider1);
        let second = event.body2.unwrap_or(event.collider2);

        if sensor_query.get(event.collider1).is_ok() {
            zone_entered.write(ZoneEntered {
                zone: first,
                actor: second,
            });
        } else if sensor_query.get(event.collider2).is_ok() {
            zone_entered.write(ZoneEntered {
                zone: second,
                actor: first,
            });
        } else {
            contact_started.write(ContactStarted {
                a: first,
                b: second,
            });
        }
    }

    for event in collision_end_events.read() {
        let first = event.body1.unwrap_or(event.collider1);
        let second = event.body2.unwrap_or(event.collider2);

        if sensor_query.get(event.collider1).is_ok() {
            zone_exited.write(ZoneExited {
                zone: first,
                actor: second,
            });
        } else if sensor_query.get(event.collider2).is_ok() {
            zone_exited.write(ZoneExited {
                zone: second,
                actor: first,
            });
        } else {
            contact_ended.write(ContactEnded {
                a: first,
                b: second,
            });
        }
    }
}

pub(crate) fn display_name(entity: Entity, name: Option<&Name>) -> String {
    match name {
        Some(name) => name.as_str().to_string(),
        None => format!("{:?}", entity),
    }
}
