//! UI domain: HUD nodes the mechanics report to.

mod hud;


pub use hud::{HealthBarFill, Hud, spawn_hud};

use bevy::prelude::*;

use crate::ui::hud::update_health_bars;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, update_health_bars);
    }
}
