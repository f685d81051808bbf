use std::time::{Duration, Instant};
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct BreakerState {
    consecutive_failures: u32,
    opened_at: Option<Instant>,
}

/// Stops calling a flaky backend after repeated failures.
///
/// Closed while failures stay below the threshold. Once it opens, calls are
/// refused until the cooldown has passed; the next call is then let through
/// and either closes the breaker (success) or re-opens it (failure).
#[derive(Debug)]
pub struct CircuitBreaker {
    state: Mutex<BreakerState>,
    failure_threshold: u32,
    cooldown: Duration,
}

impl CircuitBreaker {
    pub fn new(failure_threshold: u32, cooldown: Duration) -> Self {
        CircuitBreaker {
            state: Mutex::new(BreakerState::default()),
            failure_threshold: failure_threshold.max(1),
            cooldown,
        }
    }

    /// True while calls should be skipped.
    pub fn is_open(&self) -> bool {
        let state = self.state.lock();
        match state.opened_at {
            Some(at) => at.elapsed() < self.cooldown,
            None => false,
        }
    }

    pub fn record_success(&self) {
        let mut state = self.state.lock();
        state.consecutive_failures = 0;
        state.opened_at = None;
    }

    pub fn record_failure(&self) {
        let mut state = self.state.lock();
        state.consecutive_failures = state.consecutive_failures.saturating_add(1);
        if state.consecutive_failures >= self.failure_threshold {
            state.opened_at = Some(Instant::now());
        }
    }

    pub fn failure_count(&self) -> u32 {
        self.state.lock().consecutive_failures
    }
}
