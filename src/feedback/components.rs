//! Feedback domain: presentation-side components driven by the mechanics.

use bevy::prelude::*;

/// Value/max pair rendered as a bar by the UI.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct HealthSlider {
    pub value: f32,
    pub max_value: f32,
}

impl HealthSlider {
    pub fn new(max_value: f32) -> Self {
        Self {
            value: max_value,
            max_value,
        }
    }

    pub fn fraction(&self) -> f32 {
        if self.max_value <= 0.0 {
            0.0
        } else {
            (self.value / self.max_value).clamp(0.0, 1.0)
        }
    }
}

/// Animation states a character sprite can be pushed into by a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Death,
}

/// Playback state for trigger-driven sprite animations.
#[derive(Component, Debug, Default)]
pub struct AnimationController {
    pub state: AnimationState,
    /// Seconds spent in the current state
    pub elapsed: f32,
    pub finished: bool,
    /// Sprite color captured when the current state started
    pub base_color: Option<Color>,
}

impl AnimationController {
    /// Apply a named trigger. Returns false when the trigger is unknown.
    pub fn fire(&mut self, trigger: &str) -> bool {
        let next = match trigger {
            "Die" => AnimationState::Death,
            "Idle" => AnimationState::Idle,
            _ => return false,
        };
        if self.state != next {
            self.state = next;
            self.elapsed = 0.0;
            self.finished = false;
            self.base_color = None;
        }
        true
    }
}
