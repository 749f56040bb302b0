//! Health domain: bounded health state, pickups, hazards and feedback handles.

use bevy::prelude::*;

use crate::content::HealthConfig;

/// Bounded health with a one-way dead flag.
///
/// `current` stays within `[0, max]`. Once dead, nothing changes it again.
/// Every owner runs the death sequence, with the default delay unless a
/// `DeathSequence` is inserted alongside.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
#[require(DeathSequence)]
pub struct Health {
    current: u32,
    max: u32,
    dead: bool,
}

/// What a call to [`Health::take_damage`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Already dead; nothing applied
    Ignored,
    Damaged { applied: u32 },
    /// This hit emptied health and flipped the dead flag
    Killed { applied: u32 },
}

impl Health {
    /// Full health. `max` is raised to 1 if zero.
    pub fn new(max: u32) -> Self {
        let max = max.max(1);
        Self {
            current: max,
            max,
            dead: false,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn percent(&self) -> f32 {
        self.current as f32 / self.max as f32
    }

    /// Subtract `amount`, saturating at zero. Reaching zero marks the
    /// entity dead immediately, so any later hit is ignored.
    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        if self.dead {
            return DamageOutcome::Ignored;
        }

        let applied = amount.min(self.current);
        self.current -= applied;

        if self.current == 0 {
            self.dead = true;
            DamageOutcome::Killed { applied }
        } else {
            DamageOutcome::Damaged { applied }
        }
    }

    /// Add `amount`, saturating at max. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if self.dead {
            return 0;
        }

        let restored = amount.min(self.max - self.current);
        self.current += restored;
        restored
    }

    /// Restore to max. Returns the amount actually restored.
    pub fn regenerate_full(&mut self) -> u32 {
        if self.dead {
            return 0;
        }

        let restored = self.max - self.current;
        self.current = self.max;
        restored
    }
}

/// Optional presentation handles for a health owner, plus the flash tuning.
/// A `None` handle only skips that piece of presentation.
#[derive(Component, Debug, Clone)]
pub struct HealthFeedback {
    /// Entity carrying a `HealthSlider`
    pub slider: Option<Entity>,
    /// UI node whose `BackgroundColor` flashes on damage
    pub flash_overlay: Option<Entity>,
    pub flash_color: Color,
    pub flash_speed: f32,
    /// Text node shown on death
    pub game_over_text: Option<Entity>,
    pub game_over_message: String,
    pub pickup_sound: Option<Handle<AudioSource>>,
    pub game_over_sound: Option<Handle<AudioSource>>,
}

impl HealthFeedback {
    /// Tuning from config with every handle unassigned.
    pub fn from_config(config: &HealthConfig) -> Self {
        Self {
            slider: None,
            flash_overlay: None,
            flash_color: config.flash_color(),
            flash_speed: config.flash_speed,
            game_over_text: None,
            game_over_message: config.game_over_text.clone(),
            pickup_sound: None,
            game_over_sound: None,
        }
    }
}

/// Marks a health owner whose death ends the run: after `pause_delay`
/// seconds the simulation clock freezes.
#[derive(Component, Debug, Clone, Copy)]
pub struct DeathSequence {
    pub pause_delay: f32,
}

impl Default for DeathSequence {
    fn default() -> Self {
        Self { pause_delay: 2.0 }
    }
}

/// Restorative pickup: overlapping it restores full health and consumes it.
#[derive(Component, Debug)]
pub struct HealthPickup;

/// Sensor that hurts whichever players overlap it, once per `rehit_delay`.
#[derive(Component, Debug, Clone)]
pub struct Hazard {
    pub damage: u32,
    pub rehit_delay: f32,
    pub cooldown: f32,
    /// Players currently inside, in entry order
    pub occupants: Vec<Entity>,
}

impl Hazard {
    pub fn new(damage: u32, rehit_delay: f32) -> Self {
        Self {
            damage,
            rehit_delay,
            cooldown: 0.0,
            occupants: Vec::new(),
        }
    }
}
