//! Headless app harness shared by the system-level tests.

use std::time::Duration;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::core::CorePlugin;
use crate::feedback::PlayCue;
use crate::zones::{InteractInput, ZonesPlugin};

/// Fixed frame length used by every headless test.
pub(crate) const FRAME: Duration = Duration::from_millis(100);

/// Minimal app with a deterministic clock, the delayed-action queue and the
/// zone tracking plugin. The first update is run here so later frames all
/// carry a full `FRAME` delta.
pub(crate) fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .add_plugins((CorePlugin, ZonesPlugin));
    app.update();
    app
}

/// Run `frames` updates.
pub(crate) fn advance(app: &mut App, frames: u32) {
    for _ in 0..frames {
        app.update();
    }
}

/// Run updates until at least `seconds` of frame time went by.
pub(crate) fn advance_secs(app: &mut App, seconds: f32) {
    let frames = (seconds / FRAME.as_secs_f32()).ceil() as u32;
    advance(app, frames);
}

/// Deliver one action-key edge on the next update.
pub(crate) fn press_interact(app: &mut App) {
    app.world_mut().resource_mut::<InteractInput>().just_pressed = true;
    app.update();
    app.world_mut().resource_mut::<InteractInput>().just_pressed = false;
}

/// Labels of every audio cue requested so far, in order.
#[derive(Resource, Default, Debug)]
pub(crate) struct CueLog(pub Vec<&'static str>);

impl CueLog {
    pub(crate) fn count(&self, label: &str) -> usize {
        self.0.iter().filter(|&&logged| logged == label).count()
    }
}

fn log_cues(mut cue_events: MessageReader<PlayCue>, mut log: ResMut<CueLog>) {
    for event in cue_events.read() {
        log.0.push(event.label);
    }
}

/// Start recording `PlayCue` labels into `CueLog`. The app needs the feedback
/// plugin so the message is registered.
pub(crate) fn record_cues(app: &mut App) {
    app.init_resource::<CueLog>().add_systems(Last, log_cues);
}

pub(crate) fn cue_count(app: &App, label: &str) -> usize {
    app.world().resource::<CueLog>().count(label)
}
