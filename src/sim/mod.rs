//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = 1/60 s, motion is expressed per tick)
//! - Seeded RNG only
//! - Stable iteration order (gates keep creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{Rect, flyer_hits_gate};
pub use state::{
    Flash, FlashKind, Flyer, GamePhase, GameState, Gate, Particle, ParticleKind, Score,
};
pub use tick::{TickInput, tick};
pub use timer::SpawnTimer;
