//! Gapwing - a gravity-and-gates side-scroller
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, scoring, game state)
//! - `tuning`: Data-driven game balance
//! - `assets`: Drawable surfaces with flat-color fallback
//!
//! Rendering and input live outside this crate: a frontend reads
//! `&GameState` once per frame and feeds [`sim::TickInput`] intents back
//! into [`sim::tick`]. The simulation never calls out.

pub mod assets;
pub mod sim;
pub mod tuning;

pub use sim::{GamePhase, GameState, TickInput};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_HZ: u32 = 60;

    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 360.0;
    pub const BOARD_HEIGHT: f32 = 640.0;

    /// Flyer sprite size and fixed pose
    pub const FLYER_WIDTH: f32 = 34.0;
    pub const FLYER_HEIGHT: f32 = 24.0;
    /// The flyer never moves horizontally
    pub const FLYER_X: f32 = BOARD_WIDTH / 8.0;
    pub const FLYER_START_Y: f32 = BOARD_HEIGHT / 2.0;
    /// Hitbox shrink per side, relative to the sprite rect
    pub const HITBOX_INSET: f32 = 2.0;

    /// Gate geometry: each half is a full-height barrier, the pair shares
    /// one vertical offset and a fixed opening between the halves
    pub const GATE_WIDTH: f32 = 64.0;
    pub const GATE_HEIGHT: f32 = 512.0;
    pub const GATE_OPENING: f32 = BOARD_HEIGHT / 4.0;

    /// Convert a wall-clock interval to whole ticks (at least one)
    pub const fn ms_to_ticks(ms: u32) -> u32 {
        let ticks = (ms as u64 * TICK_HZ as u64 / 1000) as u32;
        if ticks == 0 { 1 } else { ticks }
    }

}
