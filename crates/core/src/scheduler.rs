//! Drop scheduler - the repeating gravity timer as plain data
//!
//! The scheduler does not own a clock. Callers feed it elapsed milliseconds and
//! it answers whether a gravity step is due. The period is a value
//! (`Some(ms)`, or `None` for "stopped"), and pausing only suspends accumulation.

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DropScheduler {
    interval_ms: Option<u32>,
    paused: bool,
    elapsed_ms: u32,
}

impl DropScheduler {
    pub fn new(interval_ms: Option<u32>) -> Self {
        Self {
            interval_ms,
            paused: false,
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> Option<u32> {
        self.interval_ms
    }

    /// Change the period. A different value restarts the current period.
    pub fn set_interval(&mut self, interval_ms: Option<u32>) {
        if self.interval_ms != interval_ms {
            self.interval_ms = interval_ms;
            self.elapsed_ms = 0;
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flip the pause state and return the new one
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Ticking: not paused and an interval is set
    pub fn is_running(&self) -> bool {
        !self.paused && self.interval_ms.is_some()
    }

    /// Accumulate `elapsed_ms`; true when a step is due.
    ///
    /// At most one step fires per call. Any overshoot carries over, capped at
    /// one full period so a long stall cannot queue a burst of steps.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let Some(interval) = self.interval_ms else {
            return false;
        };
        if self.paused {
            return false;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms < interval {
            return false;
        }

        self.elapsed_ms = (self.elapsed_ms - interval).min(interval);
        true
    }

    /// Drop any partially accumulated period
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}
