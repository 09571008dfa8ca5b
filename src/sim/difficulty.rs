//! Score-driven difficulty
//!
//! Scroll speed and spawn cadence are pure functions of the difficulty
//! level, which is itself a pure function of the score. Escalation happens
//! only as a side effect of scoring, never on its own timer.

use super::state::{GameState, Score};
use crate::consts::ms_to_ticks;
use crate::tuning::Tuning;

/// Difficulty tier: one level per `level_step` whole points
pub fn level(score: Score, tuning: &Tuning) -> u32 {
    score.points() / tuning.level_step.max(1)
}

/// Shared gate velocity for a level. Stays negative (leftward); the
/// magnitude compounds per level.
pub fn scroll_velocity(level: u32, tuning: &Tuning) -> f32 {
    tuning.initial_scroll_vel * tuning.speed_multiplier.powi(level as i32)
}

/// Spawn interval for a level, floored at `min_spawn_ms`
pub fn spawn_interval_ms(level: u32, tuning: &Tuning) -> u32 {
    let scaled = tuning.initial_spawn_ms as f32 / tuning.spawn_decay.powi(level as i32);
    (scaled as u32).max(tuning.min_spawn_ms)
}

/// Re-derive speed and cadence if the level has risen since the last
/// escalation. Restarting the spawn timer discards its remaining wait.
pub(crate) fn escalate(state: &mut GameState) {
    let current = level(state.score, &state.tuning);
    let last = level(state.last_level_up_score, &state.tuning);
    if current > last {
        state.scroll_vel = scroll_velocity(current, &state.tuning);
        let interval_ms = spawn_interval_ms(current, &state.tuning);
        state.spawn_timer.restart(ms_to_ticks(interval_ms));
        state.last_level_up_score = state.score;
        log::info!(
            "level {current}: scroll {:.2} px/tick, spawn every {interval_ms} ms",
            state.scroll_vel
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_is_floored() {
        let tuning = Tuning::default();
        assert_eq!(level(Score::ZERO, &tuning), 0);
        assert_eq!(level(Score::from_points(4), &tuning), 0);
        assert_eq!(level(Score::from_points(5), &tuning), 1);
        assert_eq!(level(Score::from_points(9), &tuning), 1);
        assert_eq!(level(Score::from_points(10), &tuning), 2);
    }

    #[test]
    fn test_scroll_velocity_compounds_leftward() {
        let tuning = Tuning::default();
        assert_eq!(scroll_velocity(0, &tuning), tuning.initial_scroll_vel);
        let v1 = scroll_velocity(1, &tuning);
        assert!((v1 - tuning.initial_scroll_vel * tuning.speed_multiplier).abs() < 1e-6);
        // Sign stays leftward, magnitude grows
        assert!(v1 < 0.0);
        assert!(scroll_velocity(3, &tuning).abs() > v1.abs());
    }

    #[test]
    fn test_spawn_interval_shrinks_to_floor() {
        let tuning = Tuning::default();
        assert_eq!(spawn_interval_ms(0, &tuning), 1500);
        assert_eq!(spawn_interval_ms(1, &tuning), 1363);
        // Deep levels bottom out at the floor
        assert_eq!(spawn_interval_ms(30, &tuning), tuning.min_spawn_ms);
    }

    #[test]
    fn test_curves_are_pure() {
        let tuning = Tuning::default();
        for lvl in 0..10 {
            assert_eq!(scroll_velocity(lvl, &tuning), scroll_velocity(lvl, &tuning));
            assert_eq!(
                spawn_interval_ms(lvl, &tuning),
                spawn_interval_ms(lvl, &tuning)
            );
        }
    }

    #[test]
    fn test_escalate_fires_only_on_level_increase() {
        let mut state = GameState::new(1);
        state.spawn_timer.start(90);
        let initial_vel = state.scroll_vel;

        state.score = Score::from_points(4);
        escalate(&mut state);
        assert_eq!(state.scroll_vel, initial_vel);
        assert_eq!(state.last_level_up_score, Score::ZERO);

        state.score = Score::from_points(5);
        escalate(&mut state);
        assert!(state.scroll_vel.abs() > initial_vel.abs());
        assert_eq!(state.last_level_up_score, Score::from_points(5));
        assert_eq!(state.spawn_timer.interval_ticks(), ms_to_ticks(1363));

        // Same level again: nothing changes
        let vel_after = state.scroll_vel;
        state.score = Score::from_points(6);
        escalate(&mut state);
        assert_eq!(state.scroll_vel, vel_after);
        assert_eq!(state.last_level_up_score, Score::from_points(5));
    }
}
