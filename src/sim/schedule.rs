//! Periodic activities owned by a running session
//!
//! A running session has exactly two: the per-frame tick driver and the
//! wall-clock obstacle spawn timer. They are started and cancelled together.

/// Repeating wall-clock timer fed with elapsed milliseconds
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTimer {
    period_ms: f64,
    elapsed_ms: f64,
}

impl IntervalTimer {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Add elapsed time and report whether the timer fired.
    ///
    /// A gap longer than one period (host paused, tab hidden) fires once and
    /// drops the missed periods, keeping only the leftover fraction, so a
    /// resumed game never gets a stack of obstacles at the same offset.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        if self.period_ms <= 0.0 || dt_ms <= 0.0 {
            return false;
        }
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms < self.period_ms {
            return false;
        }
        self.elapsed_ms %= self.period_ms;
        true
    }
}

/// Per-frame tick driver
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickDriver {
    last_frame_ms: Option<f64>,
}

impl TickDriver {
    /// Record a frame timestamp and return the time since the previous one.
    /// The first frame after starting reports zero.
    pub fn frame(&mut self, now_ms: f64) -> f64 {
        let dt = self
            .last_frame_ms
            .map(|last| (now_ms - last).max(0.0))
            .unwrap_or(0.0);
        self.last_frame_ms = Some(now_ms);
        dt
    }
}

/// The session's two periodic activities. Both exist or neither does.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    active: Option<(TickDriver, IntervalTimer)>,
}

impl Schedule {
    pub fn start(&mut self, spawn_interval_ms: f64) {
        self.active = Some((TickDriver::default(), IntervalTimer::new(spawn_interval_ms)));
    }

    /// Stop both activities at once
    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Feed a frame timestamp. Returns whether a spawn is due, or `None` if
    /// nothing is scheduled.
    pub fn frame(&mut self, now_ms: f64) -> Option<bool> {
        let (driver, timer) = self.active.as_mut()?;
        let dt = driver.frame(now_ms);
        Some(timer.advance(dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_fires_per_period() {
        let mut timer = IntervalTimer::new(3000.0);
        assert!(!timer.advance(2999.0));
        assert!(timer.advance(1.0));
        assert!(!timer.advance(1000.0));
        // Leftover time carries across calls
        assert!(timer.advance(2000.0));
        assert!(!timer.advance(2999.0));
        assert!(timer.advance(1.0));
    }

    #[test]
    fn test_long_gap_fires_once_and_keeps_fraction() {
        let mut timer = IntervalTimer::new(3000.0);
        assert!(timer.advance(6500.0));
        // 500 ms carried over, the second missed period is dropped
        assert!(!timer.advance(2499.0));
        assert!(timer.advance(1.0));

        assert!(timer.advance(3_600_000.0));
        assert!(!timer.advance(2999.0));
    }

    #[test]
    fn test_first_frame_is_zero() {
        let mut driver = TickDriver::default();
        assert_eq!(driver.frame(1000.0), 0.0);
        assert_eq!(driver.frame(1016.0), 16.0);
        // Clock going backwards never yields negative time
        assert_eq!(driver.frame(1010.0), 0.0);
    }

    #[test]
    fn test_cancel_stops_both() {
        let mut schedule = Schedule::default();
        assert_eq!(schedule.frame(0.0), None);

        schedule.start(100.0);
        assert!(schedule.is_active());
        assert_eq!(schedule.frame(0.0), Some(false));
        assert_eq!(schedule.frame(250.0), Some(true));
        assert_eq!(schedule.frame(290.0), Some(false));
        assert_eq!(schedule.frame(300.0), Some(true));

        schedule.cancel();
        assert!(!schedule.is_active());
        assert_eq!(schedule.frame(10_000.0), None);
    }

    #[test]
    fn test_restart_resets_timer_phase() {
        let mut schedule = Schedule::default();
        schedule.start(100.0);
        schedule.frame(0.0);
        schedule.frame(90.0);
        schedule.start(100.0);
        schedule.frame(500.0);
        assert_eq!(schedule.frame(590.0), Some(false));
        assert_eq!(schedule.frame(600.0), Some(true));
    }
}
