//! Level domain: trigger initialization and completion systems.

use std::time::Duration;

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{DelayedActions, freeze_simulation};
use crate::feedback::{PlayCue, ShowBanner};
use crate::level::{LevelCompleted, LevelCompletionTrigger};
use crate::zones::{InteractInput, InteractionZone, display_name};

/// Hide the completion text and report unassigned handles.
pub(crate) fn init_level_triggers(
    mut triggers: Query<
        (Entity, &mut LevelCompletionTrigger, Option<&Name>),
        Added<LevelCompletionTrigger>,
    >,
    mut texts: Query<&mut Visibility>,
) {
    for (entity, mut trigger, name) in &mut triggers {
        let owner = display_name(entity, name);

        match trigger.text.and_then(|e| texts.get_mut(e).ok()) {
            Some(mut visibility) => {
                *visibility = Visibility::Hidden;
                info!("Level complete text initialized and hidden on {}", owner);
            }
            None => warn!("Level complete text is not assigned on {}", owner),
        }
        if trigger.sound.is_none() {
            warn!("Level complete sound is not assigned on {}", owner);
        }
        if trigger.pause_delay < 0.0 {
            trigger.pause_delay = 0.0;
            warn!("Pause delay was negative; set to 0 on {}", owner);
        }
    }
}

pub(crate) fn complete_level_on_interact(
    input: Res<InteractInput>,
    mut triggers: Query<(
        Entity,
        &mut LevelCompletionTrigger,
        &InteractionZone,
        Option<&Name>,
    )>,
    mut delayed: ResMut<DelayedActions>,
    mut banner_events: MessageWriter<ShowBanner>,
    mut cue_events: MessageWriter<PlayCue>,
    mut completed_events: MessageWriter<LevelCompleted>,
) {
    if !input.just_pressed {
        return;
    }

    for (entity, mut trigger, zone, name) in &mut triggers {
        if !trigger.try_complete(zone.occupied, input.just_pressed) {
            continue;
        }
        let owner = display_name(entity, name);
        info!("Level complete! Triggered on {}", owner);

        banner_events.write(ShowBanner {
            target: trigger.text,
            text: trigger.message.clone(),
        });
        cue_events.write(PlayCue {
            sound: trigger.sound.clone(),
            label: "level complete",
        });
        completed_events.write(LevelCompleted { trigger: entity });

        let delay = trigger.pause_delay.max(0.0);
        delayed.schedule(
            "level_complete_pause",
            Duration::from_secs_f32(delay),
            move |world: &mut World| {
                let reason = format!("level complete after {}s on {}", delay, owner);
                freeze_simulation(world, &reason);
            },
        );
    }
}
