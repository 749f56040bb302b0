//! Content domain: configuration data read from `assets/data/mechanics.ron`.
//!
//! Every section falls back to its `Default` when omitted, so a config file
//! only needs to list what it overrides.

use bevy::math::curve::{Curve, EaseFunction};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Tunables for all four mechanics. Read once at startup.
#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MechanicsConfig {
    pub health: HealthConfig,
    pub level: LevelConfig,
    pub door: DoorConfig,
    pub platform: PlatformConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthConfig {
    pub max_health: u32,
    /// Rate at which the damage flash fades back to transparent
    pub flash_speed: f32,
    /// RGBA (sRGB) color the overlay jumps to on damage
    pub flash_color: [f32; 4],
    /// Seconds between the death transition and the simulation freeze
    pub death_pause_delay: f32,
    pub game_over_text: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            max_health: 100,
            flash_speed: 5.0,
            flash_color: [1.0, 0.0, 0.0, 0.1],
            death_pause_delay: 2.0,
            game_over_text: "GAME OVER".to_string(),
        }
    }
}

impl HealthConfig {
    pub fn flash_color(&self) -> Color {
        let [r, g, b, a] = self.flash_color;
        Color::srgba(r, g, b, a)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Seconds between completion and the simulation freeze
    pub pause_delay: f32,
    pub completion_text: String,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            pause_delay: 1.0,
            completion_text: "LEVEL COMPLETE".to_string(),
        }
    }
}

/// Direction a door slides in when it opens. The closed position sits one
/// slide distance the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum SlideDirection {
    Left,
    #[default]
    Right,
    Up,
    Down,
}

impl SlideDirection {
    pub fn unit(self) -> Vec3 {
        match self {
            SlideDirection::Left => Vec3::NEG_X,
            SlideDirection::Right => Vec3::X,
            SlideDirection::Up => Vec3::Y,
            SlideDirection::Down => Vec3::NEG_Y,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DoorConfig {
    pub direction: SlideDirection,
    pub distance: f32,
    pub speed: f32,
    /// Close the door once, shortly after the level starts
    pub close_on_start: bool,
    pub close_on_start_delay: f32,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            direction: SlideDirection::Right,
            distance: 2.0,
            speed: 2.0,
            close_on_start: true,
            close_on_start_delay: 0.5,
        }
    }
}

/// Axis a platform oscillates along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum SlideAxis {
    #[default]
    X,
    Y,
}

impl SlideAxis {
    pub fn unit(self) -> Vec3 {
        match self {
            SlideAxis::X => Vec3::X,
            SlideAxis::Y => Vec3::Y,
        }
    }
}

/// Shape applied to the platform's sine offset near its turning points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum PlatformEasing {
    Linear,
    /// Cubic Hermite ease-in-out with flat tangents at both ends
    #[default]
    SmoothStep,
    SineInOut,
    CubicInOut,
}

impl PlatformEasing {
    pub fn function(self) -> EaseFunction {
        match self {
            PlatformEasing::Linear => EaseFunction::Linear,
            PlatformEasing::SmoothStep => EaseFunction::SmoothStep,
            PlatformEasing::SineInOut => EaseFunction::SineInOut,
            PlatformEasing::CubicInOut => EaseFunction::CubicInOut,
        }
    }

    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    pub fn sample(self, t: f32) -> f32 {
        self.function().sample_clamped(t)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Distance from the center to either endpoint
    pub distance: f32,
    /// Angular speed of the underlying sine wave
    pub speed: f32,
    pub axis: SlideAxis,
    pub easing: PlatformEasing,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            distance: 2.0,
            speed: 2.0,
            axis: SlideAxis::X,
            easing: PlatformEasing::SmoothStep,
        }
    }
}
