//! Content domain: clamping of out-of-range configuration values.

use super::data::MechanicsConfig;

const FLASH_COLOR_FIELDS: [&str; 4] = [
    "health.flash_color.r",
    "health.flash_color.g",
    "health.flash_color.b",
    "health.flash_color.a",
];

/// A configuration value that was replaced by a safe one.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigAdjustment {
    pub field: &'static str,
    pub found: f32,
    pub replaced_with: f32,
}

impl std::fmt::Display for ConfigAdjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} was {}; set to {}",
            self.field, self.found, self.replaced_with
        )
    }
}

/// Clamp `value` to `min`, recording an adjustment when it was below it or
/// not a number at all.
fn clamp_min(
    adjustments: &mut Vec<ConfigAdjustment>,
    field: &'static str,
    value: &mut f32,
    min: f32,
) {
    if value.is_nan() || *value < min {
        adjustments.push(ConfigAdjustment {
            field,
            found: *value,
            replaced_with: min,
        });
        *value = min;
    }
}

/// Replace every out-of-range value in `config` with a safe one.
/// Returns what was changed so the caller can report it.
pub fn clamp_config(config: &mut MechanicsConfig) -> Vec<ConfigAdjustment> {
    let mut adjustments = Vec::new();

    if config.health.max_health == 0 {
        adjustments.push(ConfigAdjustment {
            field: "health.max_health",
            found: 0.0,
            replaced_with: 1.0,
        });
        config.health.max_health = 1;
    }
    clamp_min(&mut adjustments, "health.flash_speed", &mut config.health.flash_speed, 0.0);
    clamp_min(
        &mut adjustments,
        "health.death_pause_delay",
        &mut config.health.death_pause_delay,
        0.0,
    );
    for (channel, value) in config.health.flash_color.iter_mut().enumerate() {
        if value.is_nan() || !(0.0..=1.0).contains(&*value) {
            let clamped = if value.is_nan() { 0.0 } else { (*value).clamp(0.0, 1.0) };
            adjustments.push(ConfigAdjustment {
                field: FLASH_COLOR_FIELDS[channel],
                found: *value,
                replaced_with: clamped,
            });
            *value = clamped;
        }
    }

    clamp_min(&mut adjustments, "level.pause_delay", &mut config.level.pause_delay, 0.0);

    clamp_min(&mut adjustments, "door.distance", &mut config.door.distance, 0.0);
    clamp_min(&mut adjustments, "door.speed", &mut config.door.speed, 0.0);
    clamp_min(
        &mut adjustments,
        "door.close_on_start_delay",
        &mut config.door.close_on_start_delay,
        0.0,
    );

    clamp_min(&mut adjustments, "platform.distance", &mut config.platform.distance, 0.0);
    clamp_min(&mut adjustments, "platform.speed", &mut config.platform.speed, 0.0);

    adjustments
}
