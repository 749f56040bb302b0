//! Platform domain: tests for the oscillator and rider attachment.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use bevy::prelude::*;

use super::{PlatformPlugin, Riders, RidingOn, SlidingPlatform};
use crate::content::{PlatformConfig, PlatformEasing, SlideAxis};
use crate::player::Player;
use crate::testing::{advance, test_app};
use crate::zones::{ContactEnded, ContactStarted};

const EASINGS: [PlatformEasing; 4] = [
    PlatformEasing::Linear,
    PlatformEasing::SmoothStep,
    PlatformEasing::SineInOut,
    PlatformEasing::CubicInOut,
];

fn make_platform(
    distance: f32,
    speed: f32,
    axis: SlideAxis,
    easing: PlatformEasing,
) -> SlidingPlatform {
    SlidingPlatform::from_config(
        Vec3::ZERO,
        &PlatformConfig {
            distance,
            speed,
            axis,
            easing,
        },
    )
}

fn assert_close(a: Vec3, b: Vec3) {
    assert!(a.distance(b) < 1e-4, "{a} != {b}");
}

#[test]
fn test_quarter_phase_reaches_far_endpoint() {
    let platform = make_platform(2.0, 1.0, SlideAxis::X, PlatformEasing::SmoothStep);

    assert_close(platform.position_at(FRAC_PI_2), Vec3::new(2.0, 0.0, 0.0));
    assert_close(platform.position_at(PI + FRAC_PI_2), Vec3::new(-2.0, 0.0, 0.0));
    assert_close(platform.position_at(0.0), Vec3::ZERO);
}

#[test]
fn test_y_axis_leaves_x_fixed() {
    let mut platform = make_platform(3.0, 1.0, SlideAxis::Y, PlatformEasing::Linear);
    platform.center = Vec3::new(4.0, 1.0, 6.0);

    for step in 0..20 {
        let position = platform.position_at(step as f32 * 0.37);
        assert_eq!(position.x, 4.0);
        assert_eq!(position.z, 6.0);
        assert!((position.y - 1.0).abs() <= 3.0 + 1e-5);
    }
}

#[test]
fn test_position_is_periodic() {
    for easing in EASINGS {
        let platform = make_platform(2.5, 1.0, SlideAxis::X, easing);
        for step in 0..16 {
            let phase = step as f32 * 0.4;
            assert_close(platform.position_at(phase), platform.position_at(phase + TAU));
        }
    }
}

#[test]
fn test_period_in_time_is_two_pi_over_speed() {
    let mut platform = make_platform(2.0, 4.0, SlideAxis::X, PlatformEasing::SmoothStep);
    let dt = 0.01;
    let start = platform.advance(0.3);

    let period = TAU / platform.speed;
    let steps = (period / dt).round() as u32;
    let mut end = start;
    for _ in 0..steps {
        end = platform.advance(period / steps as f32);
    }

    assert_close(start, end);
}

#[test]
fn test_easings_are_monotonic_with_fixed_endpoints() {
    for easing in EASINGS {
        assert!(easing.sample(0.0).abs() < 1e-6);
        assert!((easing.sample(1.0) - 1.0).abs() < 1e-6);

        let mut previous = easing.sample(0.0);
        for step in 1..=100 {
            let value = easing.sample(step as f32 / 100.0);
            assert!(value >= previous - 1e-6, "{easing:?} decreased at {step}");
            previous = value;
        }
    }
}

#[test]
fn test_phase_only_grows() {
    let mut platform = make_platform(2.0, 2.0, SlideAxis::X, PlatformEasing::Linear);
    platform.advance(0.5);
    let phase = platform.phase_time;

    platform.advance(-1.0);
    assert_eq!(platform.phase_time, phase);
    platform.advance(0.1);
    assert!(platform.phase_time > phase);
}

#[test]
fn test_endpoints() {
    let platform = make_platform(2.0, 1.0, SlideAxis::X, PlatformEasing::SmoothStep);
    let (low, high) = platform.endpoints();
    assert_eq!(low, Vec3::new(-2.0, 0.0, 0.0));
    assert_eq!(high, Vec3::new(2.0, 0.0, 0.0));
}

// -----------------------------------------------------------------------------
// System tests
// -----------------------------------------------------------------------------

fn platform_app() -> (App, Entity) {
    let mut app = test_app();
    app.add_plugins(PlatformPlugin);
    let platform = app
        .world_mut()
        .spawn((
            Name::new("Platform"),
            Transform::default(),
            make_platform(2.0, 1.0, SlideAxis::X, PlatformEasing::Linear),
        ))
        .id();
    advance(&mut app, 1);
    (app, platform)
}

fn translation(app: &App, entity: Entity) -> Vec3 {
    app.world().get::<Transform>(entity).unwrap().translation
}

#[test]
fn test_platform_moves_every_tick() {
    let (mut app, platform) = platform_app();
    let before = translation(&app, platform);

    advance(&mut app, 1);
    let after = translation(&app, platform);

    assert!(after.x > before.x);
    assert_eq!(after.y, 0.0);
}

#[test]
fn test_player_landing_on_top_rides_and_detaches_in_place() {
    let (mut app, platform) = platform_app();
    let player = app
        .world_mut()
        .spawn((Player, Transform::from_xyz(0.0, 1.0, 0.0)))
        .id();

    app.world_mut().write_message(ContactStarted {
        a: player,
        b: platform,
    });
    advance(&mut app, 1);
    assert_eq!(
        app.world().get::<RidingOn>(player),
        Some(&RidingOn(platform))
    );
    assert_eq!(app.world().get::<Riders>(platform).unwrap().len(), 1);

    // Rider keeps its offset from the platform while carried
    let offset = translation(&app, player) - translation(&app, platform);
    advance(&mut app, 3);
    assert_close(translation(&app, player) - translation(&app, platform), offset);

    app.world_mut().write_message(ContactEnded {
        a: platform,
        b: player,
    });
    advance(&mut app, 1);
    assert!(app.world().get::<RidingOn>(player).is_none());

    let resting = translation(&app, player);
    advance(&mut app, 3);
    assert_eq!(translation(&app, player), resting);
}

#[test]
fn test_contact_from_below_does_not_attach() {
    let (mut app, platform) = platform_app();
    let player = app
        .world_mut()
        .spawn((Player, Transform::from_xyz(0.0, -1.0, 0.0)))
        .id();

    app.world_mut().write_message(ContactStarted {
        a: platform,
        b: player,
    });
    advance(&mut app, 1);

    assert!(app.world().get::<RidingOn>(player).is_none());
}

#[test]
fn test_non_player_is_never_carried() {
    let (mut app, platform) = platform_app();
    let crate_box = app
        .world_mut()
        .spawn(Transform::from_xyz(0.0, 1.0, 0.0))
        .id();

    app.world_mut().write_message(ContactStarted {
        a: crate_box,
        b: platform,
    });
    advance(&mut app, 1);

    assert!(app.world().get::<RidingOn>(crate_box).is_none());
}
