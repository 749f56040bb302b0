//! Zones domain: tests for occupancy tracking and contact pairing.

use avian2d::prelude::{CollisionEnd, CollisionStart, Sensor};
use bevy::prelude::*;

use super::{ContactStarted, InteractionZone, PhysicsBridgePlugin, ZoneEntered, ZoneExited};
use crate::player::Player;
use crate::testing::{advance, test_app};

fn zone_state(app: &App, zone: Entity) -> InteractionZone {
    *app.world()
        .get::<InteractionZone>(zone)
        .expect("zone entity has InteractionZone")
}

#[test]
fn test_player_enter_and_exit_toggles_occupancy() {
    let mut app = test_app();
    let zone = app.world_mut().spawn(InteractionZone::default()).id();
    let player = app.world_mut().spawn(Player).id();

    app.world_mut().write_message(ZoneEntered {
        zone,
        actor: player,
    });
    advance(&mut app, 1);
    assert!(zone_state(&app, zone).occupied);

    app.world_mut().write_message(ZoneExited {
        zone,
        actor: player,
    });
    advance(&mut app, 1);
    assert!(!zone_state(&app, zone).occupied);
}

#[test]
fn test_non_player_actor_is_ignored() {
    let mut app = test_app();
    let zone = app.world_mut().spawn(InteractionZone::default()).id();
    let crate_box = app.world_mut().spawn(Name::new("Crate")).id();

    app.world_mut().write_message(ZoneEntered {
        zone,
        actor: crate_box,
    });
    advance(&mut app, 1);

    assert!(!zone_state(&app, zone).occupied);
}

#[test]
fn test_events_for_other_zones_leave_zone_untouched() {
    let mut app = test_app();
    let zone = app.world_mut().spawn(InteractionZone::default()).id();
    let other_zone = app.world_mut().spawn(InteractionZone::default()).id();
    let player = app.world_mut().spawn(Player).id();

    app.world_mut().write_message(ZoneEntered {
        zone: other_zone,
        actor: player,
    });
    advance(&mut app, 1);

    assert!(!zone_state(&app, zone).occupied);
    assert!(zone_state(&app, other_zone).occupied);
}

#[test]
fn test_contact_other_side() {
    let mut world = World::new();
    let a = world.spawn_empty().id();
    let b = world.spawn_empty().id();
    let stranger = world.spawn_empty().id();

    let contact = ContactStarted { a, b };
    assert_eq!(contact.other(a), Some(b));
    assert_eq!(contact.other(b), Some(a));
    assert_eq!(contact.other(stranger), None);
}

// -----------------------------------------------------------------------------
// Physics bridge tests
// -----------------------------------------------------------------------------

fn bridge_app() -> App {
    let mut app = test_app();
    app.init_resource::<ButtonInput<KeyCode>>()
        .add_message::<CollisionStart>()
        .add_message::<CollisionEnd>()
        .add_plugins(PhysicsBridgePlugin);
    app
}

#[test]
fn test_sensor_child_reports_its_body_as_zone() {
    let mut app = bridge_app();
    let door = app.world_mut().spawn(InteractionZone::default()).id();
    let sensor = app.world_mut().spawn(Sensor).id();
    let player = app.world_mut().spawn(Player).id();

    app.world_mut().write_message(CollisionStart {
        collider1: player,
        collider2: sensor,
        body1: Some(player),
        body2: Some(door),
    });
    advance(&mut app, 1);
    assert!(zone_state(&app, door).occupied);

    app.world_mut().write_message(CollisionEnd {
        collider1: sensor,
        collider2: player,
        body1: Some(door),
        body2: Some(player),
    });
    advance(&mut app, 1);
    assert!(!zone_state(&app, door).occupied);
}

#[test]
fn test_standalone_sensor_is_its_own_zone() {
    let mut app = bridge_app();
    let zone = app
        .world_mut()
        .spawn((InteractionZone::default(), Sensor))
        .id();
    let player = app.world_mut().spawn(Player).id();

    app.world_mut().write_message(CollisionStart {
        collider1: zone,
        collider2: player,
        body1: None,
        body2: Some(player),
    });
    advance(&mut app, 1);

    assert!(zone_state(&app, zone).occupied);
}

#[test]
fn test_solid_pair_is_not_a_zone_event() {
    let mut app = bridge_app();
    let zone = app.world_mut().spawn(InteractionZone::default()).id();
    let player = app.world_mut().spawn(Player).id();

    app.world_mut().write_message(CollisionStart {
        collider1: zone,
        collider2: player,
        body1: Some(zone),
        body2: Some(player),
    });
    advance(&mut app, 1);

    assert!(!zone_state(&app, zone).occupied);
}
