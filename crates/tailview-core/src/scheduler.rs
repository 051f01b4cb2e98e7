//! Time-interval refresh policy

use std::time::Duration;

pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(100);
pub const MAX_REFRESH_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Whether and how often the source is re-read automatically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    pub auto_refresh: bool,
    pub interval: Duration,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            auto_refresh: true,
            interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl RefreshPolicy {
    pub fn new(auto_refresh: bool, interval: Duration) -> Self {
        Self {
            auto_refresh,
            interval: clamp_interval(interval),
        }
    }
}

fn clamp_interval(interval: Duration) -> Duration {
    interval.clamp(MIN_REFRESH_INTERVAL, MAX_REFRESH_INTERVAL)
}

/// Decides, once per UI tick, whether a refresh is due
#[derive(Debug, Clone, Default)]
pub struct RefreshScheduler {
    policy: RefreshPolicy,
    last_refresh: Duration,
}

impl RefreshScheduler {
    pub fn new(policy: RefreshPolicy) -> Self {
        Self {
            policy: RefreshPolicy::new(policy.auto_refresh, policy.interval),
            last_refresh: Duration::ZERO,
        }
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    pub fn last_refresh(&self) -> Duration {
        self.last_refresh
    }

    /// `true` when auto-refresh is on and the interval has elapsed
    pub fn is_due(&self, now: Duration) -> bool {
        self.policy.auto_refresh && now.saturating_sub(self.last_refresh) >= self.policy.interval
    }

    /// Record a refresh attempt, successful or not
    pub fn mark(&mut self, now: Duration) {
        self.last_refresh = now;
    }

    /// Returns `true` if the mode actually changed
    pub fn set_auto_refresh(&mut self, enabled: bool) -> bool {
        let changed = self.policy.auto_refresh != enabled;
        self.policy.auto_refresh = enabled;
        changed
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.policy.interval = clamp_interval(interval);
    }

    /// Grow or shrink the interval by `delta_ms`, staying within bounds
    pub fn adjust_interval(&mut self, delta_ms: i64) {
        let current = i64::try_from(self.policy.interval.as_millis()).unwrap_or(i64::MAX);
        let next = current.saturating_add(delta_ms).max(0);
        self.set_interval(Duration::from_millis(next as u64));
    }
}
