//! Health domain: player health, damage/heal requests, pickups, hazards and
//! the one-shot death sequence.

mod components;
mod events;
mod systems;


pub use components::{DamageOutcome, DeathSequence, Hazard, Health, HealthFeedback, HealthPickup};
pub use events::{DamageRequest, HealRequest, HealthChangeCause, HealthChanged, HealthDepleted};

use bevy::prelude::*;

use crate::health::systems::{
    apply_damage_requests, apply_hazard_damage, apply_heal_requests, begin_death_sequence,
    collect_health_pickups, fade_damage_flash, init_death_sequences, init_health_feedback,
    sync_health_feedback, warn_missing_feedback,
};
use crate::zones::ZoneTracking;

pub struct HealthPlugin;

impl Plugin for HealthPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DamageRequest>()
            .add_message::<HealRequest>()
            .add_message::<HealthChanged>()
            .add_message::<HealthDepleted>()
            .add_systems(
                Update,
                (
                    (warn_missing_feedback, init_health_feedback, init_death_sequences),
                    apply_hazard_damage,
                    collect_health_pickups,
                    apply_heal_requests,
                    apply_damage_requests,
                    begin_death_sequence,
                    fade_damage_flash,
                    sync_health_feedback,
                )
                    .chain()
                    .after(ZoneTracking),
            );
    }
}
