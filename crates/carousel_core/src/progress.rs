use std::time::Duration;

/// Default interval between progress bar samples.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(5);

/// Percentage of the current period elapsed, in `[0, 100)`.
///
/// Marks are milliseconds on any shared monotonic clock. A `now` before
/// `start` counts as no time elapsed; a zero period yields 0.
pub fn percent(period_ms: u64, start_ms: u64, now_ms: u64) -> f64 {
    if period_ms == 0 {
        return 0.0;
    }
    let elapsed = now_ms.saturating_sub(start_ms);
    let wrapped = elapsed % period_ms;
    (wrapped as f64 / period_ms as f64) * 100.0
}

/// Maps clock marks onto a repeating period that started at a fixed mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTimer {
    period_ms: u64,
    start_ms: u64,
}

impl ProgressTimer {
    pub fn new(period: Duration, start_ms: u64) -> Self {
        Self {
            period_ms: u64::try_from(period.as_millis()).unwrap_or(u64::MAX),
            start_ms,
        }
    }

    pub fn percent_at(&self, now_ms: u64) -> f64 {
        percent(self.period_ms, self.start_ms, now_ms)
    }
}
