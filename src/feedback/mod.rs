//! Feedback domain: optional presentation (banners, audio cues, animation
//! triggers, health slider values) requested by the mechanics.

mod components;
mod events;
mod systems;


pub use components::{AnimationController, AnimationState, HealthSlider};
pub use events::{AnimationTrigger, PlayCue, ShowBanner};
pub use systems::fade_toward_clear;

use bevy::prelude::*;

use crate::feedback::systems::{
    advance_animations, apply_animation_triggers, play_audio_cues, show_banners,
};

/// Presentation requests are written during `Update` by the mechanics and
/// consumed here afterwards.
pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ShowBanner>()
            .add_message::<PlayCue>()
            .add_message::<AnimationTrigger>()
            .add_systems(
                PostUpdate,
                (
                    show_banners,
                    play_audio_cues,
                    (apply_animation_triggers, advance_animations).chain(),
                ),
            );
    }
}
