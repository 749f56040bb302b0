//! Content domain: mechanics configuration loading and validation.

mod data;
mod loader;
mod validation;


pub use data::{
    DoorConfig, HealthConfig, LevelConfig, MechanicsConfig, PlatformConfig, PlatformEasing,
    SlideAxis, SlideDirection,
};
pub use loader::{ConfigLoadError, load_mechanics_config, parse_mechanics_config};
pub use validation::{ConfigAdjustment, clamp_config};

use bevy::prelude::*;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "assets/data/mechanics.ron";

/// Loads `MechanicsConfig` while the app is being built, so every startup
/// system already sees it. A missing or broken file falls back to defaults.
pub struct ContentPlugin {
    pub path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let mut config = match load_mechanics_config(&self.path) {
            Ok(config) => {
                info!("Loaded mechanics config from {}", self.path.display());
                config
            }
            Err(e) => {
                error!("{}; using built-in defaults", e);
                MechanicsConfig::default()
            }
        };

        for adjustment in clamp_config(&mut config) {
            warn!("Config value out of range: {}", adjustment);
        }

        app.insert_resource(config);
    }
}
