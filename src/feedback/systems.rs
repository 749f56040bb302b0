//! Feedback domain: banner, audio and animation playback.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::feedback::{AnimationController, AnimationState, AnimationTrigger, PlayCue, ShowBanner};

/// Seconds the death animation takes to settle.
pub(crate) const DEATH_ANIMATION_SECS: f32 = 0.6;

/// Move `color` toward fully transparent black by fraction `t` (clamped to
/// `[0, 1]`), component-wise in sRGB space.
pub fn fade_toward_clear(color: Color, t: f32) -> Color {
    let keep = 1.0 - t.clamp(0.0, 1.0);
    let c = color.to_srgba();
    Color::srgba(c.red * keep, c.green * keep, c.blue * keep, c.alpha * keep)
}

pub(crate) fn show_banners(
    mut banner_events: MessageReader<ShowBanner>,
    mut text_query: Query<(&mut Text, &mut Visibility)>,
) {
    for event in banner_events.read() {
        let Some(target) = event.target else {
            warn!("Cannot display '{}': no text node assigned", event.text);
            continue;
        };

        match text_query.get_mut(target) {
            Ok((mut text, mut visibility)) => {
                text.0 = event.text.clone();
                *visibility = Visibility::Visible;
                info!("Displaying '{}'", event.text);
            }
            Err(_) => warn!(
                "Cannot display '{}': {:?} is not a text node",
                event.text, target
            ),
        }
    }
}

pub(crate) fn play_audio_cues(mut commands: Commands, mut cue_events: MessageReader<PlayCue>) {
    for event in cue_events.read() {
        let Some(sound) = &event.sound else {
            warn!("Cannot play {} sound: no audio clip assigned", event.label);
            continue;
        };

        commands.spawn((AudioPlayer::new(sound.clone()), PlaybackSettings::DESPAWN));
        debug!("Playing {} sound", event.label);
    }
}

pub(crate) fn apply_animation_triggers(
    mut trigger_events: MessageReader<AnimationTrigger>,
    mut controller_query: Query<&mut AnimationController>,
) {
    for event in trigger_events.read() {
        let Ok(mut controller) = controller_query.get_mut(event.entity) else {
            debug!(
                "Skipping '{}' trigger: {:?} has no animation controller",
                event.trigger, event.entity
            );
            continue;
        };

        if !controller.fire(event.trigger) {
            warn!("Unknown animation trigger '{}'", event.trigger);
        }
    }
}

pub(crate) fn advance_animations(
    time: Res<Time>,
    mut query: Query<(&mut AnimationController, Option<&mut Sprite>)>,
) {
    let dt = time.delta_secs();

    for (mut controller, sprite) in &mut query {
        if controller.finished {
            continue;
        }
        controller.elapsed += dt;

        let state = controller.state;
        match state {
            AnimationState::Idle => controller.finished = true,
            AnimationState::Death => {
                let progress = (controller.elapsed / DEATH_ANIMATION_SECS).min(1.0);
                if let Some(mut sprite) = sprite {
                    // Darken and fade toward a translucent corpse tint
                    let base = controller.base_color.get_or_insert(sprite.color).to_srgba();
                    let shade = 1.0 - 0.6 * progress;
                    sprite.color = Color::srgba(
                        base.red * shade,
                        base.green * shade * 0.8,
                        base.blue * shade * 0.8,
                        1.0 - 0.5 * progress,
                    );
                }
                controller.finished = progress >= 1.0;
            }
        }
    }
}
