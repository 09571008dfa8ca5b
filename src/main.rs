//! Gapwing entry point
//!
//! Headless autopilot run: drives the simulation exactly the way a frontend
//! would (one `TickInput` per tick, read-only state in between) and logs
//! what happens. Doubles as a smoke run for the whole core.

use gapwing::consts::{BOARD_HEIGHT, TICK_HZ};
use gapwing::sim::{GamePhase, GameState, TickInput, tick};
use gapwing::tuning::Tuning;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5eed_cafe);
    let max_seconds: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(120);
    let tuning = match std::env::var_os("GAPWING_TUNING") {
        Some(path) => match Tuning::load_from_path(std::path::Path::new(&path)) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::warn!("ignoring tuning override: {err}");
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let mut state = GameState::with_tuning(seed, tuning);
    log::info!("autopilot run, seed {seed}, up to {max_seconds} s");

    // The first jump doubles as the start intent
    tick(
        &mut state,
        &TickInput {
            jump: true,
            ..Default::default()
        },
    );

    let max_ticks = max_seconds * TICK_HZ as u64;
    while state.phase == GamePhase::Running && state.time_ticks < max_ticks {
        let input = TickInput {
            jump: wants_jump(&state),
            ..Default::default()
        };
        tick(&mut state, &input);
    }

    println!(
        "seed {seed}: score {} (level {}) after {:.1} s",
        state.score,
        state.level(),
        state.time_ticks as f64 / TICK_HZ as f64
    );
}

/// Flap when sinking below the next opening's midline
fn wants_jump(state: &GameState) -> bool {
    let target_y = state
        .gates
        .iter()
        .find(|gate| !gate.scored)
        .map(|gate| gate.opening_center().y)
        .unwrap_or(BOARD_HEIGHT / 2.0);
    state.flyer.vel_y >= 0.0 && state.flyer.center().y > target_y
}
