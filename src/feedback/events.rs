//! Feedback domain: presentation requests.
//!
//! Handles are optional everywhere. A request whose handle is `None` is
//! reported with a warning and otherwise skipped.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Show `text` on a text node and make it visible.
#[derive(Debug, Clone)]
pub struct ShowBanner {
    pub target: Option<Entity>,
    pub text: String,
}

impl Message for ShowBanner {}

/// Play a one-shot sound.
#[derive(Debug, Clone)]
pub struct PlayCue {
    pub sound: Option<Handle<AudioSource>>,
    /// Names the cue in diagnostics
    pub label: &'static str,
}

impl Message for PlayCue {}

/// Fire a named trigger on an entity's `AnimationController`.
#[derive(Debug, Clone, Copy)]
pub struct AnimationTrigger {
    pub entity: Entity,
    pub trigger: &'static str,
}

impl Message for AnimationTrigger {}
