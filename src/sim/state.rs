//! Game state and core simulation types
//!
//! Everything a frontend needs to draw one frame is reachable from
//! [`GameState`] by shared reference; mutation goes through `sim::tick` only.

use std::fmt;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::timer::SpawnTimer;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fresh session, waiting for the first jump
    Ready,
    /// Active gameplay
    Running,
    /// Frozen mid-run; no spawns, no physics
    Paused,
    /// Run ended by collision or falling out of bounds
    GameOver,
}

/// Session score in half-point units.
///
/// Each gate is worth one whole point, accrued as a single credit when the
/// flyer clears the pair. The half-point granularity keeps edge-crossing
/// accrual representable without floats; display rounding is [`Score::points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Score(u32);

impl Score {
    pub const ZERO: Score = Score(0);

    pub fn from_points(points: u32) -> Score {
        Score(points * 2)
    }

    /// Whole points, floored. This is the value shown to the player and the
    /// input to the difficulty curve.
    pub fn points(self) -> u32 {
        self.0 / 2
    }

    /// Raw half-point units
    pub fn half_points(self) -> u32 {
        self.0
    }

    /// Credit one cleared gate (both edges of the pair at once)
    pub fn credit_gate(&mut self) {
        self.0 += 2;
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

/// The player-controlled entity
#[derive(Debug, Clone)]
pub struct Flyer {
    /// Top-left corner of the sprite rect; x never changes
    pub pos: Vec2,
    /// Vertical velocity in px/tick, negative is up
    pub vel_y: f32,
    /// Visual bank angle in degrees, derived from velocity
    pub rotation_deg: f32,
}

impl Flyer {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(FLYER_X, FLYER_START_Y),
            vel_y: 0.0,
            rotation_deg: 0.0,
        }
    }

    /// Set vertical velocity to the jump impulse. Unconditional: repeated
    /// jumps replace the velocity rather than stacking.
    pub fn jump(&mut self, tuning: &Tuning) {
        self.vel_y = tuning.jump_velocity;
    }

    /// One tick of gravity integration. The flyer cannot rise above the top
    /// boundary: y is clamped to >= 0 after every step.
    pub fn advance(&mut self, tuning: &Tuning) {
        self.vel_y += tuning.gravity;
        self.pos.y += self.vel_y;
        self.pos.y = self.pos.y.max(0.0);
        self.rotation_deg = (self.vel_y * 3.0).clamp(-45.0, 90.0);
    }

    pub fn reset(&mut self) {
        *self = Flyer::new();
    }

    /// Collision rect, inset from the sprite for forgiving contacts
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(FLYER_WIDTH, FLYER_HEIGHT)).inset(HITBOX_INSET)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(FLYER_WIDTH / 2.0, FLYER_HEIGHT / 2.0)
    }
}

impl Default for Flyer {
    fn default() -> Self {
        Self::new()
    }
}

/// One obstacle pair: an upper and a lower barrier sharing a vertical offset,
/// separated by a fixed opening. Scored as a single unit.
#[derive(Debug, Clone)]
pub struct Gate {
    /// Left edge, shared by both halves
    pub x: f32,
    /// Top edge of the upper barrier (negative: most of it hangs off-screen)
    pub top_y: f32,
    /// Set once, when the flyer clears the pair
    pub scored: bool,
}

impl Gate {
    pub fn new(x: f32, top_y: f32) -> Self {
        Self {
            x,
            top_y,
            scored: false,
        }
    }

    /// Horizontal translation by the shared scroll velocity
    pub fn advance(&mut self, scroll_vel: f32) {
        self.x += scroll_vel;
    }

    /// True once the trailing edge has crossed the left boundary
    pub fn is_offscreen(&self) -> bool {
        self.x + GATE_WIDTH < 0.0
    }

    pub fn trailing_edge(&self) -> f32 {
        self.x + GATE_WIDTH
    }

    pub fn upper_rect(&self) -> Rect {
        Rect::new(
            Vec2::new(self.x, self.top_y),
            Vec2::new(GATE_WIDTH, GATE_HEIGHT),
        )
    }

    /// Lower barrier top edge: derived, so the opening height is invariant
    pub fn lower_top(&self) -> f32 {
        self.top_y + GATE_HEIGHT + GATE_OPENING
    }

    pub fn lower_rect(&self) -> Rect {
        Rect::new(
            Vec2::new(self.x, self.lower_top()),
            Vec2::new(GATE_WIDTH, GATE_HEIGHT),
        )
    }

    /// Middle of the passable opening, at the trailing edge
    pub fn opening_center(&self) -> Vec2 {
        Vec2::new(self.trailing_edge(), self.top_y + GATE_HEIGHT + GATE_OPENING / 2.0)
    }
}

/// Particle tint, looked up by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Gate cleared
    Score,
    /// Collision / out of bounds
    Impact,
}

impl ParticleKind {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            ParticleKind::Score => [255, 215, 0],
            ParticleKind::Impact => [255, 0, 0],
        }
    }
}

/// A transient visual particle (not gameplay-affecting)
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub kind: ParticleKind,
    /// Remaining lifetime in ticks, monotonically decreasing
    pub life: u8,
    /// Initial lifetime, kept for fade-out
    pub max_life: u8,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, kind: ParticleKind, life: u8) -> Self {
        Self {
            pos,
            vel,
            kind,
            life,
            max_life: life,
        }
    }

    /// One tick: move, then pull down, then age
    pub fn advance(&mut self, gravity: f32) {
        self.pos += self.vel;
        self.vel.y += gravity;
        self.life = self.life.saturating_sub(1);
    }

    pub fn is_expired(&self) -> bool {
        self.life == 0
    }

    /// Render opacity in [0, 1]
    pub fn alpha(&self) -> f32 {
        self.life as f32 / self.max_life as f32
    }
}

/// Full-screen flash tint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Score,
    Impact,
}

impl FlashKind {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            FlashKind::Score => [255, 255, 0],
            FlashKind::Impact => [255, 0, 0],
        }
    }
}

/// Short full-screen flash; decays one tick at a time while running
#[derive(Debug, Clone, Copy)]
pub struct Flash {
    pub kind: FlashKind,
    pub ticks_left: u8,
    pub total: u8,
}

impl Flash {
    pub(crate) fn score(tuning: &Tuning) -> Self {
        Self {
            kind: FlashKind::Score,
            ticks_left: tuning.score_flash_ticks,
            total: tuning.score_flash_ticks,
        }
    }

    pub(crate) fn impact(tuning: &Tuning) -> Self {
        Self {
            kind: FlashKind::Impact,
            ticks_left: tuning.impact_flash_ticks,
            total: tuning.impact_flash_ticks,
        }
    }

    /// Render opacity in [0, 1]
    pub fn alpha(&self) -> f32 {
        self.ticks_left as f32 / self.total as f32
    }
}

/// Complete session state, owned by the simulation core.
///
/// Frontends hold it, read it, and pass it to [`super::tick`]; they never
/// mutate fields directly.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: Score,
    /// Best score of any run this session; folded in on game over
    pub high_score: Score,
    /// Shared horizontal velocity of all gates (negative, leftward); set
    /// only by the difficulty controller
    pub scroll_vel: f32,
    /// Score at the most recent difficulty escalation
    pub last_level_up_score: Score,
    pub flyer: Flyer,
    /// Active gates in creation order
    pub gates: Vec<Gate>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub flash: Option<Flash>,
    pub spawn_timer: SpawnTimer,
    /// Ticks elapsed in the current run
    pub time_ticks: u64,
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh session with the given seed and default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let scroll_vel = tuning.initial_scroll_vel;
        Self {
            seed,
            phase: GamePhase::Ready,
            score: Score::ZERO,
            high_score: Score::ZERO,
            scroll_vel,
            last_level_up_score: Score::ZERO,
            flyer: Flyer::new(),
            gates: Vec::new(),
            particles: Vec::new(),
            flash: None,
            spawn_timer: SpawnTimer::idle(),
            time_ticks: 0,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Rebuild the session in place rather than patching fields one by one.
    ///
    /// The spawn timer is cancelled before anything else so a pending spawn
    /// can never land in the rebuilt state. High score and the RNG stream
    /// survive the reset; consecutive runs see different gate layouts.
    pub fn reset(&mut self) {
        self.spawn_timer.cancel();
        let mut fresh = GameState::with_tuning(self.seed, self.tuning.clone());
        fresh.high_score = self.high_score;
        fresh.rng = self.rng.clone();
        *self = fresh;
    }

    /// Current difficulty tier, for HUD display
    pub fn level(&self) -> u32 {
        super::difficulty::level(self.score, &self.tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_score_display_floors_to_points() {
        let mut score = Score::ZERO;
        assert_eq!(score.to_string(), "0");
        score.credit_gate();
        assert_eq!(score.points(), 1);
        assert_eq!(score.half_points(), 2);
        assert_eq!(score.to_string(), "1");
        assert_eq!(Score::from_points(7).points(), 7);
    }

    #[test]
    fn test_jump_replaces_velocity() {
        let tuning = Tuning::default();
        let mut flyer = Flyer::new();
        flyer.vel_y = 12.0;
        flyer.jump(&tuning);
        let after_one = flyer.vel_y;
        flyer.jump(&tuning);
        assert_eq!(flyer.vel_y, after_one);
        assert_eq!(flyer.vel_y, tuning.jump_velocity);
    }

    #[test]
    fn test_advance_clamps_at_top() {
        let tuning = Tuning::default();
        let mut flyer = Flyer::new();
        flyer.pos.y = 2.0;
        flyer.vel_y = -50.0;
        flyer.advance(&tuning);
        assert_eq!(flyer.pos.y, 0.0);
    }

    #[test]
    fn test_rotation_tracks_velocity_within_limits() {
        let tuning = Tuning::default();
        let mut flyer = Flyer::new();
        flyer.vel_y = -30.0;
        flyer.advance(&tuning);
        // Rising fast: pinned at the upward limit
        assert_eq!(flyer.rotation_deg, -45.0);
        flyer.vel_y = 5.0;
        flyer.advance(&tuning);
        // Moderate descent: proportional to velocity
        assert_eq!(flyer.rotation_deg, 18.0);
        for _ in 0..60 {
            flyer.advance(&tuning);
        }
        // Falling fast: pinned at the downward limit
        assert_eq!(flyer.rotation_deg, 90.0);
    }

    #[test]
    fn test_gate_opening_is_fixed() {
        let gate = Gate::new(360.0, -300.0);
        assert_eq!(
            gate.lower_rect().pos.y - gate.upper_rect().bottom(),
            GATE_OPENING
        );
        assert!(!gate.scored);
    }

    #[test]
    fn test_gate_offscreen_at_trailing_edge() {
        let mut gate = Gate::new(0.0, -300.0);
        assert!(!gate.is_offscreen());
        gate.x = -GATE_WIDTH;
        assert!(!gate.is_offscreen());
        gate.x = -GATE_WIDTH - 0.5;
        assert!(gate.is_offscreen());
    }

    #[test]
    fn test_particle_fades_and_expires() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(1.0, -2.0), ParticleKind::Score, 2);
        assert_eq!(p.alpha(), 1.0);
        p.advance(0.2);
        assert_eq!(p.pos, Vec2::new(1.0, -2.0));
        assert!(p.vel.y > -2.0);
        assert!(!p.is_expired());
        p.advance(0.2);
        assert!(p.is_expired());
    }

    #[test]
    fn test_reset_keeps_high_score_and_tuning() {
        let mut state = GameState::new(3);
        state.score = Score::from_points(4);
        state.high_score = Score::from_points(9);
        state.gates.push(Gate::new(100.0, -200.0));
        state.phase = GamePhase::GameOver;
        state.reset();
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, Score::ZERO);
        assert_eq!(state.high_score, Score::from_points(9));
        assert!(state.gates.is_empty());
        assert!(!state.spawn_timer.is_armed());
    }

    proptest! {
        #[test]
        fn flyer_never_leaves_top_boundary(jumps in proptest::collection::vec(any::<bool>(), 0..200)) {
            let tuning = Tuning::default();
            let mut flyer = Flyer::new();
            for jump in jumps {
                if jump {
                    flyer.jump(&tuning);
                }
                flyer.advance(&tuning);
                prop_assert!(flyer.pos.y >= 0.0);
            }
        }

        #[test]
        fn rotation_always_clamped(vel in -500.0f32..500.0) {
            let tuning = Tuning::default();
            let mut flyer = Flyer::new();
            flyer.vel_y = vel;
            flyer.advance(&tuning);
            prop_assert!((-45.0..=90.0).contains(&flyer.rotation_deg));
        }
    }
}
