//! Platform domain: oscillation and rider attachment.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::platform::{Riders, RidingOn, SlidingPlatform};
use crate::player::Player;
use crate::zones::{ContactEnded, ContactStarted, display_name};

pub(crate) fn log_new_platforms(
    platforms: Query<(Entity, &SlidingPlatform, Option<&Name>), Added<SlidingPlatform>>,
) {
    for (entity, platform, name) in &platforms {
        info!(
            "[PLATFORM] {} initialized at center {}",
            display_name(entity, name),
            platform.center
        );
    }
}

/// Move every platform to its next eased position and carry its riders by
/// the same offset.
pub(crate) fn oscillate_platforms(
    time: Res<Time>,
    mut platforms: Query<(&mut SlidingPlatform, &mut Transform, Option<&Riders>)>,
    mut riders: Query<&mut Transform, (With<RidingOn>, Without<SlidingPlatform>)>,
) {
    let dt = time.delta_secs();

    for (mut platform, mut transform, carried) in &mut platforms {
        let next = platform.advance(dt);
        let delta = next - transform.translation;
        transform.translation = next;

        let Some(carried) = carried else {
            continue;
        };
        for rider in carried.iter() {
            if let Ok(mut rider_transform) = riders.get_mut(rider) {
                rider_transform.translation += delta;
            }
        }
    }
}

/// Pick out the platform side of a contact pair, with the player on the
/// other side.
fn platform_and_player(
    a: Entity,
    b: Entity,
    platforms: &Query<&Transform, With<SlidingPlatform>>,
    players: &Query<&Transform, (With<Player>, Without<SlidingPlatform>)>,
) -> Option<(Entity, Entity)> {
    if platforms.contains(a) && players.contains(b) {
        Some((a, b))
    } else if platforms.contains(b) && players.contains(a) {
        Some((b, a))
    } else {
        None
    }
}

pub(crate) fn attach_riders(
    mut commands: Commands,
    mut contact_events: MessageReader<ContactStarted>,
    platforms: Query<&Transform, With<SlidingPlatform>>,
    players: Query<&Transform, (With<Player>, Without<SlidingPlatform>)>,
    names: Query<&Name>,
) {
    for event in contact_events.read() {
        let Some((platform, rider)) = platform_and_player(event.a, event.b, &platforms, &players)
        else {
            continue;
        };
        let (Ok(platform_transform), Ok(rider_transform)) =
            (platforms.get(platform), players.get(rider))
        else {
            continue;
        };

        // Side and underside contacts don't count as landing
        if rider_transform.translation.y <= platform_transform.translation.y {
            continue;
        }

        commands.entity(rider).try_insert(RidingOn(platform));
        info!(
            "[PLATFORM] Player landed on {}",
            display_name(platform, names.get(platform).ok())
        );
    }
}

pub(crate) fn detach_riders(
    mut commands: Commands,
    mut contact_events: MessageReader<ContactEnded>,
    riders: Query<&RidingOn>,
    names: Query<&Name>,
) {
    for event in contact_events.read() {
        for (rider, other) in [(event.a, event.b), (event.b, event.a)] {
            let Ok(riding) = riders.get(rider) else {
                continue;
            };
            if riding.0 != other {
                continue;
            }

            commands.entity(rider).try_remove::<RidingOn>();
            info!(
                "[PLATFORM] Player left {}",
                display_name(other, names.get(other).ok())
            );
        }
    }
}
