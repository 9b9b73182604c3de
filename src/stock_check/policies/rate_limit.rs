use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// A vendor's published request limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitPolicy {
    /// Consecutive call starts are at least `interval` apart
    FixedSpacing { interval: Duration },
    /// At most `max_calls` call starts per window; a full window blocks
    /// until `window` has elapsed since that window started
    FixedWindow { max_calls: u32, window: Duration },
}

impl RateLimitPolicy {
    /// Lower bound on the time between the first and the last of `calls` calls.
    pub fn minimum_duration(&self, calls: usize) -> Duration {
        if calls <= 1 {
            return Duration::ZERO;
        }
        let gaps = calls - 1;
        match *self {
            RateLimitPolicy::FixedSpacing { interval } => {
                interval.saturating_mul(u32::try_from(gaps).unwrap_or(u32::MAX))
            }
            RateLimitPolicy::FixedWindow { max_calls, window } => {
                let full_windows = gaps / max_calls.max(1) as usize;
                window.saturating_mul(u32::try_from(full_windows).unwrap_or(u32::MAX))
            }
        }
    }
}

impl std::fmt::Display for RateLimitPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateLimitPolicy::FixedSpacing { interval } => {
                write!(f, "1 call every {} ms", interval.as_millis())
            }
            RateLimitPolicy::FixedWindow { max_calls, window } => {
                write!(f, "{} calls per {} s", max_calls, window.as_secs())
            }
        }
    }
}

#[derive(Debug, Default)]
struct LimiterState {
    last_slot: Option<Instant>,
    window_start: Option<Instant>,
    used_in_window: u32,
}

/// RateLimiter spaces out calls to a single vendor
///
/// Each caller reserves the next free slot under a short lock and then sleeps
/// until that slot outside the lock, so concurrent callers are served in
/// reservation order and every caller eventually proceeds. Slots are measured
/// from call start to call start, so time spent inside a request counts
/// toward the spacing instead of being added on top of it.
#[derive(Debug)]
pub struct RateLimiter {
    policy: RateLimitPolicy,
    state: Mutex<LimiterState>,
}

impl RateLimiter {
    pub fn new(policy: RateLimitPolicy) -> Self {
        Self {
            policy,
            state: Mutex::new(LimiterState::default()),
        }
    }

    /// A limiter that never delays; intended for tests and local mocks.
    pub fn unlimited() -> Self {
        Self::new(RateLimitPolicy::FixedSpacing {
            interval: Duration::ZERO,
        })
    }

    pub fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    /// Waits until the next call may start.
    pub async fn acquire(&self) {
        let now = Instant::now();
        let slot = self.reserve(now);
        if slot > now {
            tracing::debug!(
                wait_ms = (slot - now).as_millis() as u64,
                policy = %self.policy,
                "rate limiter delaying call"
            );
            tokio::time::sleep_until(slot).await;
        }
    }

    fn reserve(&self, now: Instant) -> Instant {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let slot = match self.policy {
            RateLimitPolicy::FixedSpacing { interval } => match state.last_slot {
                Some(last) => (last + interval).max(now),
                None => now,
            },
            RateLimitPolicy::FixedWindow { max_calls, window } => {
                let max_calls = max_calls.max(1);
                let start = match state.window_start {
                    Some(start) if state.used_in_window >= max_calls => {
                        state.used_in_window = 0;
                        (start + window).max(now)
                    }
                    Some(start) if now >= start + window => {
                        state.used_in_window = 0;
                        now
                    }
                    Some(start) => start,
                    None => {
                        state.used_in_window = 0;
                        now
                    }
                };
                state.window_start = Some(start);
                state.used_in_window += 1;
                start.max(now)
            }
        };

        state.last_slot = Some(slot);
        slot
    }
}
