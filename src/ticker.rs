use crate::domain::Countdown;
use std::time::{Duration, Instant};

/// Poll interval while no timer is running (date checks only)
pub const IDLE_TICK_MS: u64 = 1000;

/// Lower bound so a wake-up right on a second boundary doesn't spin
pub const MIN_TICK_MS: u64 = 10;

/// How long the event loop may block before the screen needs redrawing:
/// until the soonest running clock flips to its next second
pub fn poll_timeout(timers: &[&Countdown], now: Instant) -> Duration {
    timers
        .iter()
        .filter_map(|timer| timer.until_next_second(now))
        .min()
        .map(|wait| wait.max(Duration::from_millis(MIN_TICK_MS)))
        .unwrap_or(Duration::from_millis(IDLE_TICK_MS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimerKind;

    #[test]
    fn test_idle_timers_use_slow_tick() {
        let work = Countdown::new(TimerKind::Work, 25);
        let rest = Countdown::new(TimerKind::Break, 5);
        let timeout = poll_timeout(&[&work, &rest], Instant::now());
        assert_eq!(timeout, Duration::from_millis(IDLE_TICK_MS));
    }

    #[test]
    fn test_running_timer_wakes_on_next_second() {
        let start = Instant::now();
        let mut work = Countdown::new(TimerKind::Work, 25);
        work.start(start);

        let timeout = poll_timeout(&[&work], start + Duration::from_millis(2300));
        assert_eq!(timeout, Duration::from_millis(700));
    }

    #[test]
    fn test_soonest_timer_wins() {
        let start = Instant::now();
        let mut work = Countdown::new(TimerKind::Work, 25);
        let mut rest = Countdown::new(TimerKind::Break, 5);
        work.start(start);
        rest.start(start + Duration::from_millis(600));

        let timeout = poll_timeout(&[&work, &rest], start + Duration::from_millis(1100));
        assert_eq!(timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_boundary_is_clamped() {
        let start = Instant::now();
        let mut work = Countdown::new(TimerKind::Work, 25);
        work.start(start);

        let timeout = poll_timeout(&[&work], start + Duration::from_nanos(999_999_999));
        assert_eq!(timeout, Duration::from_millis(MIN_TICK_MS));
    }
}
