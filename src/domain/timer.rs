use super::enums::TimerKind;
use std::time::{Duration, Instant};

/// Runtime state of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
}

/// A countdown that measures elapsed wall time against a target duration.
///
/// Elapsed time is derived from the start instant plus time banked across
/// pauses, so missed ticks never drift the clock.
#[derive(Debug, Clone)]
pub struct Countdown {
    pub kind: TimerKind,
    /// Target length in minutes
    pub minutes: u64,
    pub status: TimerStatus,
    /// Elapsed time from previous running stretches
    banked: Duration,
    /// When the current running stretch began
    started_at: Option<Instant>,
}

impl Countdown {
    pub fn new(kind: TimerKind, minutes: u64) -> Self {
        Self {
            kind,
            minutes: kind.clamp_minutes(minutes),
            status: TimerStatus::Idle,
            banked: Duration::ZERO,
            started_at: None,
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.minutes * 60
    }

    /// Whole seconds elapsed in the current interval, capped at the target
    pub fn elapsed_secs(&self, now: Instant) -> u64 {
        let running = self
            .started_at
            .map(|started| now.saturating_duration_since(started))
            .unwrap_or(Duration::ZERO);
        (self.banked + running).as_secs().min(self.total_secs())
    }

    pub fn remaining_secs(&self, now: Instant) -> u64 {
        match self.status {
            TimerStatus::Idle => self.total_secs(),
            _ => self.total_secs() - self.elapsed_secs(now),
        }
    }

    /// 0.0 to 1.0 for gauges
    pub fn progress(&self, now: Instant) -> f64 {
        let total = self.total_secs();
        if total == 0 || self.status == TimerStatus::Idle {
            return 0.0;
        }
        self.elapsed_secs(now) as f64 / total as f64
    }

    /// Time until the displayed clock changes; None unless running
    pub fn until_next_second(&self, now: Instant) -> Option<Duration> {
        let started = self.started_at?;
        let elapsed = self.banked + now.saturating_duration_since(started);
        Some(Duration::from_secs(1) - Duration::from_nanos(u64::from(elapsed.subsec_nanos())))
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn is_idle(&self) -> bool {
        self.status == TimerStatus::Idle
    }

    /// Start from idle (fresh interval) or resume from paused
    pub fn start(&mut self, now: Instant) {
        match self.status {
            TimerStatus::Idle => {
                self.banked = Duration::ZERO;
                self.started_at = Some(now);
                self.status = TimerStatus::Running;
            }
            TimerStatus::Paused => {
                self.started_at = Some(now);
                self.status = TimerStatus::Running;
            }
            TimerStatus::Running => {}
        }
    }

    pub fn pause(&mut self, now: Instant) {
        if let Some(started) = self.started_at.take() {
            self.banked += now.saturating_duration_since(started);
        }
        if self.status == TimerStatus::Running {
            self.status = TimerStatus::Paused;
        }
    }

    /// Start when idle or paused, pause when running
    pub fn toggle(&mut self, now: Instant) {
        if self.is_running() {
            self.pause(now);
        } else {
            self.start(now);
        }
    }

    /// Advance the countdown. Returns the credited seconds when the interval
    /// completes on this tick.
    pub fn tick(&mut self, now: Instant) -> Option<u64> {
        if !self.is_running() {
            return None;
        }
        let elapsed = self.elapsed_secs(now);
        if elapsed < self.total_secs() {
            return None;
        }
        self.clear();
        Some(elapsed)
    }

    /// Stop and return to the full duration.
    ///
    /// Returns the seconds to credit: only a running interval with time on
    /// it counts, a paused one is discarded.
    pub fn reset(&mut self, now: Instant) -> Option<u64> {
        let credited = match self.status {
            TimerStatus::Running => Some(self.elapsed_secs(now)).filter(|secs| *secs > 0),
            _ => None,
        };
        self.clear();
        credited
    }

    /// Change the target length. Ignored unless idle.
    pub fn adjust_minutes(&mut self, delta: i64) -> bool {
        if !self.is_idle() {
            return false;
        }
        let target = (self.minutes as i64).saturating_add(delta).max(0) as u64;
        self.minutes = self.kind.clamp_minutes(target);
        true
    }

    fn clear(&mut self) {
        self.banked = Duration::ZERO;
        self.started_at = None;
        self.status = TimerStatus::Idle;
    }
}
