//! Health domain: damage, healing, pickups, death and feedback systems.

use std::collections::HashSet;
use std::time::Duration;

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{DelayedActions, freeze_simulation};
use crate::feedback::{AnimationTrigger, HealthSlider, PlayCue, ShowBanner, fade_toward_clear};
use crate::health::{
    DamageOutcome, DamageRequest, DeathSequence, Hazard, HealRequest, Health, HealthChangeCause,
    HealthChanged, HealthDepleted, HealthFeedback, HealthPickup,
};
use crate::player::Player;
use crate::zones::{ZoneEntered, ZoneExited, display_name};

/// Report unassigned presentation handles once, when the component appears.
pub(crate) fn warn_missing_feedback(
    query: Query<(Entity, &HealthFeedback, Option<&Name>), Added<HealthFeedback>>,
) {
    for (entity, feedback, name) in &query {
        let owner = display_name(entity, name);
        if feedback.slider.is_none() {
            warn!("Health slider is not assigned on {}", owner);
        }
        if feedback.flash_overlay.is_none() {
            warn!("Damage flash overlay is not assigned on {}", owner);
        }
        if feedback.game_over_text.is_none() {
            warn!("Game over text is not assigned on {}", owner);
        }
        if feedback.pickup_sound.is_none() {
            warn!("Pickup sound is not assigned on {}", owner);
        }
        if feedback.game_over_sound.is_none() {
            warn!("Game over sound is not assigned on {}", owner);
        }
    }
}

/// Negative death delays are clamped to zero with a warning.
pub(crate) fn init_death_sequences(
    mut query: Query<(Entity, &mut DeathSequence, Option<&Name>), Added<DeathSequence>>,
) {
    for (entity, mut sequence, name) in &mut query {
        if sequence.pause_delay < 0.0 || sequence.pause_delay.is_nan() {
            sequence.pause_delay = 0.0;
            warn!(
                "Death pause delay was negative; set to 0 on {}",
                display_name(entity, name)
            );
        }
    }
}

/// Fill the slider and hide the game over text when a health owner spawns.
pub(crate) fn init_health_feedback(
    owners: Query<(&Health, &HealthFeedback), Added<HealthFeedback>>,
    mut sliders: Query<&mut HealthSlider>,
    mut texts: Query<&mut Visibility>,
) {
    for (health, feedback) in &owners {
        if let Some(mut slider) = feedback.slider.and_then(|e| sliders.get_mut(e).ok()) {
            slider.max_value = health.max() as f32;
            slider.value = health.current() as f32;
        }
        if let Some(mut visibility) = feedback.game_over_text.and_then(|e| texts.get_mut(e).ok()) {
            *visibility = Visibility::Hidden;
        }
    }
}

/// Track who stands in each hazard and hit them once the cooldown allows.
pub(crate) fn apply_hazard_damage(
    time: Res<Time>,
    mut entered_events: MessageReader<ZoneEntered>,
    mut exited_events: MessageReader<ZoneExited>,
    mut hazards: Query<&mut Hazard>,
    players: Query<(), (With<Player>, With<Health>)>,
    mut damage_events: MessageWriter<DamageRequest>,
) {
    for event in entered_events.read() {
        if players.get(event.actor).is_err() {
            continue;
        }
        if let Ok(mut hazard) = hazards.get_mut(event.zone) {
            if !hazard.occupants.contains(&event.actor) {
                hazard.occupants.push(event.actor);
            }
        }
    }
    for event in exited_events.read() {
        if let Ok(mut hazard) = hazards.get_mut(event.zone) {
            hazard.occupants.retain(|&occupant| occupant != event.actor);
        }
    }

    let dt = time.delta_secs();

    for mut hazard in &mut hazards {
        if hazard.cooldown > 0.0 {
            hazard.cooldown -= dt;
        }
        if hazard.occupants.is_empty() || hazard.cooldown > 0.0 {
            continue;
        }

        for &target in &hazard.occupants {
            damage_events.write(DamageRequest {
                target,
                amount: hazard.damage,
            });
        }
        hazard.cooldown = hazard.rehit_delay;
    }
}

/// Overlapping a pickup restores full health, consumes the pickup and plays
/// the pickup cue.
pub(crate) fn collect_health_pickups(
    mut commands: Commands,
    mut zone_events: MessageReader<ZoneEntered>,
    pickups: Query<(), With<HealthPickup>>,
    mut owners: Query<(&mut Health, Option<&HealthFeedback>), With<Player>>,
    mut changed_events: MessageWriter<HealthChanged>,
    mut cue_events: MessageWriter<PlayCue>,
) {
    let mut consumed = HashSet::new();

    for event in zone_events.read() {
        if pickups.get(event.zone).is_err() || consumed.contains(&event.zone) {
            continue;
        }
        let Ok((mut health, feedback)) = owners.get_mut(event.actor) else {
            continue;
        };

        // Consumed either way; a dead player just gains nothing from it
        let restored = health.regenerate_full();
        consumed.insert(event.zone);
        commands.entity(event.zone).despawn();
        info!("Health pickup collected, restored {}", restored);

        if restored > 0 {
            changed_events.write(HealthChanged {
                entity: event.actor,
                current: health.current(),
                max: health.max(),
                cause: HealthChangeCause::Pickup,
            });
        }
        cue_events.write(PlayCue {
            sound: feedback.and_then(|f| f.pickup_sound.clone()),
            label: "pickup",
        });
    }
}

pub(crate) fn apply_heal_requests(
    mut heal_events: MessageReader<HealRequest>,
    mut query: Query<&mut Health>,
    mut changed_events: MessageWriter<HealthChanged>,
) {
    for event in heal_events.read() {
        let Ok(mut health) = query.get_mut(event.target) else {
            continue;
        };

        if health.heal(event.amount) > 0 {
            changed_events.write(HealthChanged {
                entity: event.target,
                current: health.current(),
                max: health.max(),
                cause: HealthChangeCause::Heal,
            });
        }
    }
}

pub(crate) fn apply_damage_requests(
    mut damage_events: MessageReader<DamageRequest>,
    mut query: Query<(&mut Health, Option<&Name>)>,
    mut changed_events: MessageWriter<HealthChanged>,
    mut depleted_events: MessageWriter<HealthDepleted>,
) {
    for event in damage_events.read() {
        let Ok((mut health, name)) = query.get_mut(event.target) else {
            continue;
        };

        let outcome = health.take_damage(event.amount);
        if outcome == DamageOutcome::Ignored {
            continue;
        }

        debug!(
            "{} took {} damage, health {}/{}",
            display_name(event.target, name),
            event.amount,
            health.current(),
            health.max()
        );
        changed_events.write(HealthChanged {
            entity: event.target,
            current: health.current(),
            max: health.max(),
            cause: HealthChangeCause::Damage,
        });

        if let DamageOutcome::Killed { .. } = outcome {
            depleted_events.write(HealthDepleted {
                entity: event.target,
            });
        }
    }
}

/// The dead flag is already set by the time this runs. Plays the death
/// animation, sound and text, then queues the clock freeze.
pub(crate) fn begin_death_sequence(
    mut depleted_events: MessageReader<HealthDepleted>,
    query: Query<(Option<&HealthFeedback>, &DeathSequence, Option<&Name>)>,
    mut delayed: ResMut<DelayedActions>,
    mut animation_events: MessageWriter<AnimationTrigger>,
    mut banner_events: MessageWriter<ShowBanner>,
    mut cue_events: MessageWriter<PlayCue>,
) {
    for event in depleted_events.read() {
        let Ok((feedback, sequence, name)) = query.get(event.entity) else {
            continue;
        };
        let owner = display_name(event.entity, name);
        info!("{} is dying", owner);

        animation_events.write(AnimationTrigger {
            entity: event.entity,
            trigger: "Die",
        });
        if let Some(feedback) = feedback {
            banner_events.write(ShowBanner {
                target: feedback.game_over_text,
                text: feedback.game_over_message.clone(),
            });
            cue_events.write(PlayCue {
                sound: feedback.game_over_sound.clone(),
                label: "game over",
            });
        }

        delayed.schedule(
            "death_pause",
            Duration::from_secs_f32(sequence.pause_delay),
            move |world: &mut World| {
                info!("{} has died!", owner);
                freeze_simulation(world, "player death");
            },
        );
    }
}

/// Push health changes into the slider and flash the overlay on damage.
pub(crate) fn sync_health_feedback(
    mut changed_events: MessageReader<HealthChanged>,
    owners: Query<&HealthFeedback>,
    mut sliders: Query<&mut HealthSlider>,
    mut overlays: Query<&mut BackgroundColor>,
) {
    for event in changed_events.read() {
        let Ok(feedback) = owners.get(event.entity) else {
            continue;
        };

        if let Some(mut slider) = feedback.slider.and_then(|e| sliders.get_mut(e).ok()) {
            slider.value = event.current as f32;
            slider.max_value = event.max as f32;
        }

        if event.cause == HealthChangeCause::Damage {
            if let Some(mut overlay) = feedback.flash_overlay.and_then(|e| overlays.get_mut(e).ok())
            {
                overlay.0 = feedback.flash_color;
            }
        }
    }
}

/// Every tick the flash overlay decays toward transparent.
pub(crate) fn fade_damage_flash(
    time: Res<Time>,
    owners: Query<&HealthFeedback>,
    mut overlays: Query<&mut BackgroundColor>,
) {
    let dt = time.delta_secs();

    for feedback in &owners {
        let Some(mut overlay) = feedback.flash_overlay.and_then(|e| overlays.get_mut(e).ok())
        else {
            continue;
        };
        overlay.0 = fade_toward_clear(overlay.0, feedback.flash_speed * dt);
    }
}
