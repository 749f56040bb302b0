//! Level domain: the level-completion trigger.

use bevy::prelude::*;

use crate::content::LevelConfig;

/// One-way `Idle -> Completed` trigger fired by the action key while the
/// player stands in its `InteractionZone`.
#[derive(Component, Debug, Clone)]
pub struct LevelCompletionTrigger {
    pub completed: bool,
    /// Seconds between completion and the simulation freeze
    pub pause_delay: f32,
    pub message: String,
    /// Text node shown on completion
    pub text: Option<Entity>,
    pub sound: Option<Handle<AudioSource>>,
}

impl LevelCompletionTrigger {
    pub fn from_config(config: &LevelConfig) -> Self {
        Self {
            completed: false,
            pause_delay: config.pause_delay,
            message: config.completion_text.clone(),
            text: None,
            sound: None,
        }
    }

    /// Attempt the transition. Returns true only on the call that completes
    /// the level.
    pub fn try_complete(&mut self, occupied: bool, interact_pressed: bool) -> bool {
        if self.completed || !occupied || !interact_pressed {
            return false;
        }
        self.completed = true;
        true
    }
}
