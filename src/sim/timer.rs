//! Tick-counted spawn scheduling
//!
//! The gate spawner is conceptually a second periodic timer next to the
//! 60 Hz physics tick. Both are multiplexed onto the same tick call, so the
//! "timer" is a countdown checked at exactly one site: it can never fire
//! concurrently with state mutation, and a cancelled timer can never fire
//! late. Re-arming always starts a full interval; any remaining wait from
//! the previous schedule is discarded.

/// A restartable countdown measured in simulation ticks
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_ticks: u32,
    remaining: u32,
    armed: bool,
}

impl SpawnTimer {
    /// A disarmed timer; [`SpawnTimer::tick`] never fires until started
    pub fn idle() -> Self {
        Self {
            interval_ticks: 0,
            remaining: 0,
            armed: false,
        }
    }

    /// Arm with a full interval
    pub fn start(&mut self, interval_ticks: u32) {
        self.interval_ticks = interval_ticks.max(1);
        self.remaining = self.interval_ticks;
        self.armed = true;
    }

    /// Disarm. Guaranteed: no fire after this call until re-armed.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Cancel and re-arm at a new interval, discarding the remaining wait
    pub fn restart(&mut self, interval_ticks: u32) {
        self.cancel();
        self.start(interval_ticks);
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval_ticks(&self) -> u32 {
        self.interval_ticks
    }

    /// Ticks left before the next fire
    pub fn remaining_ticks(&self) -> u32 {
        self.remaining
    }

    /// Count down one tick; true exactly when the deadline elapses.
    /// The timer re-arms itself for the next period on fire.
    pub fn tick(&mut self) -> bool {
        if !self.armed || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.remaining = self.interval_ticks;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_fires(timer: &mut SpawnTimer, ticks: u32) -> u32 {
        (0..ticks).filter(|_| timer.tick()).count() as u32
    }

    #[test]
    fn test_idle_timer_never_fires() {
        let mut timer = SpawnTimer::idle();
        assert_eq!(count_fires(&mut timer, 1000), 0);
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut timer = SpawnTimer::idle();
        timer.start(30);
        assert_eq!(count_fires(&mut timer, 29), 0);
        assert!(timer.tick());
        // Re-armed automatically for the next period
        assert_eq!(count_fires(&mut timer, 30), 1);
        assert_eq!(count_fires(&mut timer, 90), 3);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut timer = SpawnTimer::idle();
        timer.start(10);
        assert_eq!(count_fires(&mut timer, 9), 0);
        timer.cancel();
        assert!(!timer.is_armed());
        assert_eq!(count_fires(&mut timer, 100), 0);
    }

    #[test]
    fn test_restart_discards_remaining_wait() {
        let mut timer = SpawnTimer::idle();
        timer.start(10);
        assert_eq!(count_fires(&mut timer, 9), 0);
        // One tick from firing; restarting pushes the deadline out a full period
        timer.restart(10);
        assert_eq!(count_fires(&mut timer, 9), 0);
        assert!(timer.tick());
    }

    #[test]
    fn test_rearm_after_cancel_uses_full_interval() {
        let mut timer = SpawnTimer::idle();
        timer.start(20);
        assert_eq!(count_fires(&mut timer, 15), 0);
        timer.cancel();
        timer.start(20);
        assert_eq!(timer.remaining_ticks(), 20);
        assert_eq!(count_fires(&mut timer, 19), 0);
        assert!(timer.tick());
    }

    #[test]
    fn test_zero_interval_clamps_to_one_tick() {
        let mut timer = SpawnTimer::idle();
        timer.start(0);
        assert!(timer.tick());
        assert!(timer.tick());
    }
}
