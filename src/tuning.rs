//! Data-driven game balance
//!
//! Every knob the simulation consults lives here, so a balance pass is a
//! JSON edit rather than a rebuild. Missing fields fall back to the
//! defaults, which are the shipped feel.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Balance knobs. Motion is expressed per tick at the fixed 60 Hz rate;
/// spawn intervals are wall-clock milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration, px/tick^2
    pub gravity: f32,
    /// Jump impulse, px/tick (negative is up)
    pub jump_velocity: f32,
    /// Gate velocity at level 0, px/tick (negative is leftward)
    pub initial_scroll_vel: f32,
    /// Per-level multiplier on scroll speed magnitude
    pub speed_multiplier: f32,
    /// Spawn interval at level 0
    pub initial_spawn_ms: u32,
    /// Spawn interval floor
    pub min_spawn_ms: u32,
    /// Per-level divisor on the spawn interval
    pub spawn_decay: f32,
    /// Whole points per difficulty level
    pub level_step: u32,
    /// Particles per gate-cleared burst
    pub score_burst: u32,
    /// Particles per collision burst
    pub impact_burst: u32,
    /// Particle lifetime in ticks
    pub particle_life: u8,
    /// Downward pull on particles, px/tick^2
    pub particle_gravity: f32,
    /// Gate-cleared flash duration in ticks
    pub score_flash_ticks: u8,
    /// Collision flash duration in ticks
    pub impact_flash_ticks: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 1.0,
            jump_velocity: -9.0,
            initial_scroll_vel: -4.0,
            speed_multiplier: 1.15,
            initial_spawn_ms: 1500,
            min_spawn_ms: 1000,
            spawn_decay: 1.1,
            level_step: 5,
            score_burst: 10,
            impact_burst: 20,
            particle_life: 20,
            particle_gravity: 0.2,
            score_flash_ticks: 3,
            impact_flash_ticks: 5,
        }
    }
}

/// Failure to load a tuning override file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] io::Error),
    #[error("malformed tuning file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Tuning {
    /// Load overrides from a JSON file; unspecified fields keep defaults
    pub fn load_from_path(path: &Path) -> Result<Self, TuningError> {
        let text = fs::read_to_string(path)?;
        let tuning: Tuning = serde_json::from_str(&text)?;
        Ok(tuning.sanitized())
    }

    /// Clamp values a file could set to something the sim can't run with
    pub fn sanitized(mut self) -> Self {
        self.level_step = self.level_step.max(1);
        self.min_spawn_ms = self.min_spawn_ms.min(self.initial_spawn_ms);
        self.spawn_decay = self.spawn_decay.max(1.0);
        self.particle_life = self.particle_life.max(1);
        self.score_flash_ticks = self.score_flash_ticks.max(1);
        self.impact_flash_ticks = self.impact_flash_ticks.max(1);
        self
    }
}
