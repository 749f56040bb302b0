//! Debug domain: toggles for the debug overlays.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Draw slide ranges for doors and platforms
    pub show_gizmos: bool,
    /// Whether to show the player/clock info overlay
    pub show_info: bool,
    /// Message to display temporarily in the info overlay
    pub status_message: Option<(String, f32)>,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_gizmos: true,
            show_info: false,
            status_message: None,
        }
    }
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}
