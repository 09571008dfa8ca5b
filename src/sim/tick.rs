//! Fixed timestep simulation tick
//!
//! One call per 60 Hz frame. Intents are honored in every phase; physics,
//! spawning, scoring and collision run only while the game is running.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::difficulty;
use super::state::{Flash, GamePhase, GameState, Gate, Particle, ParticleKind};
use crate::consts::*;

/// Input intents for a single tick.
///
/// The input adapter fills one of these per frame. It may collapse a single
/// physical key into jump / start / restart depending on phase; the
/// simulation keeps the intents distinct. Jump while paused or after game
/// over is silently ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub jump: bool,
    pub toggle_pause: bool,
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Restart wins over everything: cancel the spawn timer and rebuild
    if input.restart {
        state.reset();
        return;
    }

    if input.toggle_pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                // Structurally stopped, not just skipped: nothing can fire
                state.spawn_timer.cancel();
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Running;
                // Resume re-arms at the full current interval
                let level = difficulty::level(state.score, &state.tuning);
                let interval_ms = difficulty::spawn_interval_ms(level, &state.tuning);
                state.spawn_timer.start(ms_to_ticks(interval_ms));
            }
            _ => {}
        }
    }

    if input.jump {
        match state.phase {
            GamePhase::Ready => start(state),
            GamePhase::Running => state.flyer.jump(&state.tuning),
            GamePhase::Paused | GamePhase::GameOver => {}
        }
    }

    // Everything below is gameplay; any other phase is a complete no-op
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    // Decay the screen flash
    if let Some(flash) = &mut state.flash {
        flash.ticks_left = flash.ticks_left.saturating_sub(1);
        if flash.ticks_left == 0 {
            state.flash = None;
        }
    }

    // 1. Flyer physics
    state.flyer.advance(&state.tuning);

    // 2. Particles: drop expired ones, then move the survivors
    state.particles.retain(|p| !p.is_expired());
    let particle_gravity = state.tuning.particle_gravity;
    for particle in &mut state.particles {
        particle.advance(particle_gravity);
    }

    // 3. Spawn source, multiplexed onto the same tick as physics
    if state.spawn_timer.tick() {
        spawn_gate(state);
    }

    // 4. Gates, in creation order: move, score, collide
    let scroll_vel = state.scroll_vel;
    let flyer_x = state.flyer.pos.x;
    for i in 0..state.gates.len() {
        state.gates[i].advance(scroll_vel);

        // The run may have ended at an earlier gate this tick; keep moving
        // the rest but stop scoring and colliding
        if state.phase != GamePhase::Running {
            continue;
        }

        if !state.gates[i].scored && flyer_x > state.gates[i].trailing_edge() {
            state.gates[i].scored = true;
            state.score.credit_gate();
            let at = state.gates[i].opening_center();
            let count = state.tuning.score_burst;
            spawn_burst(state, at, ParticleKind::Score, count);
            state.flash = Some(Flash::score(&state.tuning));
            difficulty::escalate(state);
        }

        if collision::flyer_hits_gate(&state.flyer, &state.gates[i]) {
            end_game(state);
        }
    }
    // Offscreen gates leave the active set every tick, hit or miss
    state.gates.retain(|gate| !gate.is_offscreen());

    // 5. Bounds. y < 0 is unreachable after the clamp in Flyer::advance;
    // the branch stays as a guard.
    if state.phase == GamePhase::Running {
        let y = state.flyer.pos.y;
        if y > BOARD_HEIGHT || y < 0.0 {
            end_game(state);
        }
    }
}

/// First jump on a fresh session: begin running, apply the initial
/// impulse, arm the spawn timer
fn start(state: &mut GameState) {
    state.phase = GamePhase::Running;
    state.flyer.jump(&state.tuning);
    let level = difficulty::level(state.score, &state.tuning);
    let interval_ms = difficulty::spawn_interval_ms(level, &state.tuning);
    state.spawn_timer.start(ms_to_ticks(interval_ms));
    log::info!("run started (seed {})", state.seed);
}

/// Terminal transition: freeze the run, fold the score into the session
/// best, leave a red mark
fn end_game(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    state.spawn_timer.cancel();
    state.high_score = state.high_score.max(state.score);
    let at = state.flyer.center();
    let count = state.tuning.impact_burst;
    spawn_burst(state, at, ParticleKind::Impact, count);
    state.flash = Some(Flash::impact(&state.tuning));
    log::info!(
        "game over after {} ticks: score {}, best {}",
        state.time_ticks,
        state.score,
        state.high_score
    );
}

/// Create one gate at the right edge. The upper barrier's offset is drawn
/// uniformly from [-3/4, -1/4] of the barrier height, which keeps the
/// opening inside the visible band and biased toward the upper half.
pub(crate) fn spawn_gate(state: &mut GameState) {
    let top_y = state
        .rng
        .random_range(-0.75 * GATE_HEIGHT..-0.25 * GATE_HEIGHT);
    state.gates.push(Gate::new(BOARD_WIDTH, top_y));
}

/// Burst of identically tinted particles with randomized spread
fn spawn_burst(state: &mut GameState, at: Vec2, kind: ParticleKind, count: u32) {
    let life = state.tuning.particle_life;
    for _ in 0..count {
        let vel = Vec2::new(
            (state.rng.random::<f32>() - 0.5) * 4.0,
            (state.rng.random::<f32>() - 0.5) * 4.0 - 2.0,
        );
        state.particles.push(Particle::new(at, vel, kind, life));
    }
}
